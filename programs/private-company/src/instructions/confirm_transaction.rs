use anchor_lang::prelude::*;

use crate::constants::TREASURY_SEED;
use crate::instructions::execution::finish_execution;
use crate::state::{Company, ExecutionEnv, PendingAction};

pub fn confirm_transaction(ctx: Context<ConfirmTransaction>, id: u64) -> Result<()> {
    let company_key = ctx.accounts.company.key();
    let owner = ctx.accounts.owner.key();
    let env = ExecutionEnv {
        now_ts: Clock::get()?.unix_timestamp,
        treasury_balance: ctx.accounts.treasury.to_account_info().lamports(),
        rent_floor: Rent::get()?.minimum_balance(0),
    };

    let accounts = &mut *ctx.accounts;
    let outcome =
        accounts
            .company
            .confirm_transaction(company_key, &mut accounts.action, owner, &env)?;

    emit!(TransactionConfirmed {
        company: company_key,
        id,
        owner,
        confirmations: accounts.action.confirmed_by.len() as u8,
        required: accounts.company.get_role_member_count() as u8,
    });

    if let Some(outcome) = outcome {
        finish_execution(
            &accounts.company,
            company_key,
            &accounts.action,
            outcome,
            &accounts.treasury,
            &accounts.recipient,
            &accounts.system_program,
        )?;
    }
    Ok(())
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct ConfirmTransaction<'info> {
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

    #[account(
        mut,
        seeds = [PendingAction::SEED_PREFIX, company.key().as_ref(), &id.to_le_bytes()],
        bump = action.bump
    )]
    pub action: Account<'info, PendingAction>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, company.key().as_ref()],
        bump = company.treasury_bump
    )]
    pub treasury: SystemAccount<'info>,

    /// CHECK: Only credited with lamports; must equal the action target when
    /// this confirmation executes an `External` or `DestroyCompany` action.
    #[account(mut)]
    pub recipient: Option<UncheckedAccount<'info>>,

    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TransactionConfirmed {
    pub company: Pubkey,
    pub id: u64,
    pub owner: Pubkey,
    pub confirmations: u8,
    pub required: u8,
}
