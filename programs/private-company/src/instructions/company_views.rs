use anchor_lang::prelude::*;

use crate::error::CompanyError;
use crate::state::{ActionDetails, Company, CompanyOverview, HolderBalance, PendingAction};

// Read-only instructions; results travel back as return data.

pub fn is_owner(ctx: Context<ReadCompany>, owner: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.company.is_owner(&owner))
}

pub fn get_role_member_count(ctx: Context<ReadCompany>) -> Result<u32> {
    Ok(ctx.accounts.company.get_role_member_count())
}

pub fn get_founders(ctx: Context<ReadCompany>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.company.founders().to_vec())
}

pub fn transaction_count(ctx: Context<ReadCompany>) -> Result<u64> {
    Ok(ctx.accounts.company.transaction_count)
}

pub fn vesting_schedule(ctx: Context<ReadCompany>) -> Result<bool> {
    Ok(ctx.accounts.company.vesting_schedule())
}

pub fn stopped(ctx: Context<ReadCompany>) -> Result<bool> {
    Ok(ctx.accounts.company.stopped())
}

pub fn get_equity_holder_balance(ctx: Context<ReadCompany>, owner: Pubkey) -> Result<HolderBalance> {
    Ok(ctx.accounts.company.get_equity_holder_balance(&owner)?)
}

pub fn get_company_overview(ctx: Context<ReadCompany>) -> Result<CompanyOverview> {
    Ok(ctx.accounts.company.overview())
}

pub fn get_transaction_details(ctx: Context<ReadAction>, id: u64) -> Result<ActionDetails> {
    let action = &ctx.accounts.action;
    ctx.accounts
        .company
        .ensure_known_action(ctx.accounts.company.key(), action)?;
    require!(action.id == id, CompanyError::UnknownAction);
    Ok(action.details())
}

#[derive(Accounts)]
pub struct ReadCompany<'info> {
    #[account(
        seeds = [
            Company::SEED_PREFIX,
            company.creator.as_ref(),
            &company.index.to_le_bytes()
        ],
        bump = company.bump,
        constraint = !company.destroyed @ CompanyError::InstanceDestroyed
    )]
    pub company: Box<Account<'info, Company>>,
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct ReadAction<'info> {
    #[account(
        seeds = [
            Company::SEED_PREFIX,
            company.creator.as_ref(),
            &company.index.to_le_bytes()
        ],
        bump = company.bump,
        constraint = !company.destroyed @ CompanyError::InstanceDestroyed
    )]
    pub company: Box<Account<'info, Company>>,

    #[account(
        seeds = [PendingAction::SEED_PREFIX, company.key().as_ref(), &id.to_le_bytes()],
        bump = action.bump
    )]
    pub action: Account<'info, PendingAction>,
}
