use anchor_lang::prelude::*;

use crate::state::Company;

pub fn stop_contract(ctx: Context<StopContract>) -> Result<()> {
    let company_key = ctx.accounts.company.key();
    let owner = ctx.accounts.owner.key();
    if ctx.accounts.company.stop(&owner)? {
        emit!(EmergencyStopped {
            company: company_key,
            owner,
        });
    }
    Ok(())
}

#[derive(Accounts)]
pub struct StopContract<'info> {
    #[account(
        mut,
        seeds = [
            Company::SEED_PREFIX,
            company.creator.as_ref(),
            &company.index.to_le_bytes()
        ],
        bump = company.bump
    )]
    pub company: Box<Account<'info, Company>>,
    pub owner: Signer<'info>,
}

#[event]
pub struct EmergencyStopped {
    pub company: Pubkey,
    pub owner: Pubkey,
}
