use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::TREASURY_SEED;
use crate::state::{Company, ExecutionEnv};

pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    let env = ExecutionEnv {
        now_ts: Clock::get()?.unix_timestamp,
        treasury_balance: ctx.accounts.treasury.to_account_info().lamports(),
        rent_floor: Rent::get()?.minimum_balance(0),
    };
    ctx.accounts.company.check_deposit(amount, &env)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(TreasuryFunded {
        company: ctx.accounts.company.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        treasury_balance: ctx.accounts.treasury.to_account_info().lamports(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundTreasury<'info> {
    #[account(
        seeds = [
            Company::SEED_PREFIX,
            company.creator.as_ref(),
            &company.index.to_le_bytes()
        ],
        bump = company.bump
    )]
    pub company: Box<Account<'info, Company>>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, company.key().as_ref()],
        bump = company.treasury_bump
    )]
    pub treasury: SystemAccount<'info>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TreasuryFunded {
    pub company: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub treasury_balance: u64,
}
