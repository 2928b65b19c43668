use anchor_lang::prelude::*;

use crate::instructions::company_views::ReadCompany;

pub fn quote_vested_equity(ctx: Context<ReadCompany>, owner: Pubkey) -> Result<u64> {
    let company = &ctx.accounts.company;
    let now = Clock::get()?.unix_timestamp;

    let releasable = company.quote_vested_equity(&owner, now)?;
    let holder = company.get_equity_holder_balance(&owner)?;

    emit!(VestingQuote {
        company: company.key(),
        owner,
        vesting_total: holder.vesting_total,
        released: holder.released,
        locked: holder.locked,
        releasable,
    });

    Ok(releasable)
}

#[event]
pub struct VestingQuote {
    pub company: Pubkey,
    pub owner: Pubkey,
    pub vesting_total: u64,
    pub released: u64,
    pub locked: u64,
    pub releasable: u64,
}
