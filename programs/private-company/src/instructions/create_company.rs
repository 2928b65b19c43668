use anchor_lang::prelude::*;

use crate::constants::TREASURY_SEED;
use crate::state::{Company, CreatorRegistry};

pub fn create_company(
    ctx: Context<CreateCompany>,
    name: String,
    ticker: String,
    founders: Vec<Pubkey>,
) -> Result<Pubkey> {
    let creator = ctx.accounts.creator.key();
    let company_key = ctx.accounts.company.key();
    let now = Clock::get()?.unix_timestamp;

    let registry = &mut ctx.accounts.registry;
    registry.ensure_capacity()?;

    let (_, treasury_bump) =
        Pubkey::find_program_address(&[TREASURY_SEED, company_key.as_ref()], &crate::ID);

    let company = Company::genesis(
        creator,
        registry.instance_count,
        name,
        ticker,
        &founders,
        now,
        ctx.bumps.company,
        treasury_bump,
    )?;
    let index = registry.record(company_key)?;

    emit!(CompanyInstantiated {
        creator,
        instantiation: company_key,
        index,
        name: company.name.clone(),
        ticker: company.ticker.clone(),
        founders: company.founders().to_vec(),
        founder_share: company
            .ledger
            .holders()
            .first()
            .map(|h| h.current)
            .unwrap_or_default(),
        equity_pool: company.ledger.equity_pool,
    });

    ctx.accounts.company.set_inner(company);
    Ok(company_key)
}

#[derive(Accounts)]
pub struct CreateCompany<'info> {
    #[account(
        mut,
        seeds = [CreatorRegistry::SEED_PREFIX, creator.key().as_ref()],
        bump = registry.bump
    )]
    pub registry: Account<'info, CreatorRegistry>,

    #[account(
        init,
        payer = creator,
        space = 8 + Company::INIT_SPACE,
        seeds = [
            Company::SEED_PREFIX,
            creator.key().as_ref(),
            &registry.instance_count.to_le_bytes()
        ],
        bump
    )]
    pub company: Box<Account<'info, Company>>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Instantiation notification; `instantiation` is the new company handle.
#[event]
pub struct CompanyInstantiated {
    pub creator: Pubkey,
    pub instantiation: Pubkey,
    pub index: u64,
    pub name: String,
    pub ticker: String,
    pub founders: Vec<Pubkey>,
    pub founder_share: u64,
    pub equity_pool: u64,
}
