use anchor_lang::prelude::*;

use crate::state::Company;

pub fn resume_contract(ctx: Context<ResumeContract>) -> Result<()> {
    let company_key = ctx.accounts.company.key();
    let owner = ctx.accounts.owner.key();
    if ctx.accounts.company.resume(&owner)? {
        emit!(EmergencyResumed {
            company: company_key,
            owner,
        });
    }
    Ok(())
}

#[derive(Accounts)]
pub struct ResumeContract<'info> {
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
pub struct EmergencyResumed {
    pub company: Pubkey,
    pub owner: Pubkey,
}
