use anchor_lang::prelude::*;

use crate::state::Company;

pub fn transfer_equity(ctx: Context<TransferEquity>, to: Pubkey, amount: u64) -> Result<()> {
    let company_key = ctx.accounts.company.key();
    let from = ctx.accounts.owner.key();

    let company = &mut ctx.accounts.company;
    company.transfer_equity(&from, &to, amount)?;

    emit!(EquityTransferred {
        company: company_key,
        from,
        to,
        amount,
        from_current: company.get_equity_holder_balance(&from)?.current,
        to_current: company.get_equity_holder_balance(&to)?.current,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferEquity<'info> {
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
pub struct EquityTransferred {
    pub company: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub from_current: u64,
    pub to_current: u64,
}
