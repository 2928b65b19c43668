use anchor_lang::prelude::*;

use crate::state::Company;

pub fn release_vested_equity(ctx: Context<ReleaseVestedEquity>) -> Result<u64> {
    let company_key = ctx.accounts.company.key();
    let owner = ctx.accounts.owner.key();
    let now = Clock::get()?.unix_timestamp;

    let company = &mut ctx.accounts.company;
    let amount = company.release_vested_equity(&owner, now)?;
    if amount == 0 {
        return Ok(0);
    }

    let holder = company.get_equity_holder_balance(&owner)?;
    emit!(EquityReleased {
        company: company_key,
        owner,
        amount,
        current: holder.current,
        locked: holder.locked,
        released_total: holder.released,
    });

    Ok(amount)
}

#[derive(Accounts)]
pub struct ReleaseVestedEquity<'info> {
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
pub struct EquityReleased {
    pub company: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub current: u64,
    pub locked: u64,
    pub released_total: u64,
}
