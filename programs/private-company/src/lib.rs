use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{ActionDetails, ActionKind, CompanyOverview, HolderBalance};

declare_id!("C9XTpsJ9ViRwNbKzZApoMQQPHGRvQeq1zBdEY8nV9er4");

#[program]
pub mod private_company {
    use super::*;

    // Registry

    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry(ctx)
    }

    pub fn create_company(
        ctx: Context<CreateCompany>,
        name: String,
        ticker: String,
        founders: Vec<Pubkey>,
    ) -> Result<Pubkey> {
        instructions::create_company(ctx, name, ticker, founders)
    }

    pub fn get_instantiation_count(ctx: Context<ReadRegistry>, creator: Pubkey) -> Result<u64> {
        instructions::get_instantiation_count(ctx, creator)
    }

    pub fn is_instantiation(
        ctx: Context<ReadRegistry>,
        creator: Pubkey,
        candidate: Pubkey,
    ) -> Result<bool> {
        instructions::is_instantiation(ctx, creator, candidate)
    }

    // Governance queue

    pub fn submit_transaction(
        ctx: Context<SubmitTransaction>,
        kind: ActionKind,
        target: Pubkey,
        value: u64,
        payload: Vec<u8>,
    ) -> Result<u64> {
        instructions::submit_transaction(ctx, kind, target, value, payload)
    }

    pub fn confirm_transaction(ctx: Context<ConfirmTransaction>, id: u64) -> Result<()> {
        instructions::confirm_transaction(ctx, id)
    }

    pub fn get_transaction_details(ctx: Context<ReadAction>, id: u64) -> Result<ActionDetails> {
        instructions::get_transaction_details(ctx, id)
    }

    pub fn transaction_count(ctx: Context<ReadCompany>) -> Result<u64> {
        instructions::transaction_count(ctx)
    }

    // Equity

    pub fn release_vested_equity(ctx: Context<ReleaseVestedEquity>) -> Result<u64> {
        instructions::release_vested_equity(ctx)
    }

    pub fn quote_vested_equity(ctx: Context<ReadCompany>, owner: Pubkey) -> Result<u64> {
        instructions::quote_vested_equity(ctx, owner)
    }

    pub fn transfer_equity(ctx: Context<TransferEquity>, to: Pubkey, amount: u64) -> Result<()> {
        instructions::transfer_equity(ctx, to, amount)
    }

    pub fn get_equity_holder_balance(
        ctx: Context<ReadCompany>,
        owner: Pubkey,
    ) -> Result<HolderBalance> {
        instructions::get_equity_holder_balance(ctx, owner)
    }

    pub fn vesting_schedule(ctx: Context<ReadCompany>) -> Result<bool> {
        instructions::vesting_schedule(ctx)
    }

    // Owners

    pub fn is_owner(ctx: Context<ReadCompany>, owner: Pubkey) -> Result<bool> {
        instructions::is_owner(ctx, owner)
    }

    pub fn get_role_member_count(ctx: Context<ReadCompany>) -> Result<u32> {
        instructions::get_role_member_count(ctx)
    }

    pub fn get_founders(ctx: Context<ReadCompany>) -> Result<Vec<Pubkey>> {
        instructions::get_founders(ctx)
    }

    pub fn get_company_overview(ctx: Context<ReadCompany>) -> Result<CompanyOverview> {
        instructions::get_company_overview(ctx)
    }

    // Treasury and circuit breaker

    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        instructions::fund_treasury(ctx, amount)
    }

    pub fn stop_contract(ctx: Context<StopContract>) -> Result<()> {
        instructions::stop_contract(ctx)
    }

    pub fn resume_contract(ctx: Context<ResumeContract>) -> Result<()> {
        instructions::resume_contract(ctx)
    }

    pub fn stopped(ctx: Context<ReadCompany>) -> Result<bool> {
        instructions::stopped(ctx)
    }
}
