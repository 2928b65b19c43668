use anchor_lang::prelude::*;

use crate::constants::TREASURY_SEED;
use crate::instructions::execution::finish_execution;
use crate::state::{ActionKind, Company, ExecutionEnv, PendingAction};

pub fn submit_transaction(
    ctx: Context<SubmitTransaction>,
    kind: ActionKind,
    target: Pubkey,
    value: u64,
    payload: Vec<u8>,
) -> Result<u64> {
    let company_key = ctx.accounts.company.key();
    let owner = ctx.accounts.owner.key();
    let env = ExecutionEnv {
        now_ts: Clock::get()?.unix_timestamp,
        treasury_balance: ctx.accounts.treasury.to_account_info().lamports(),
        rent_floor: Rent::get()?.minimum_balance(0),
    };

    let (record, outcome) = ctx.accounts.company.submit_transaction(
        company_key,
        owner,
        kind,
        target,
        value,
        &payload,
        &env,
        ctx.bumps.action,
    )?;
    let id = record.id;
    ctx.accounts.action.set_inner(record);

    emit!(TransactionSubmitted {
        company: company_key,
        id,
        kind,
        target,
        value,
        payload_hash: ctx.accounts.action.payload_hash,
        submitter: owner,
    });

    let accounts = &ctx.accounts;
    match outcome {
        Some(outcome) => finish_execution(
            &accounts.company,
            company_key,
            &accounts.action,
            outcome,
            &accounts.treasury,
            &accounts.recipient,
            &accounts.system_program,
        )?,
        None => msg!(
            "transaction {} pending: 1/{} confirmations",
            id,
            accounts.company.get_role_member_count()
        ),
    }

    Ok(id)
}

#[derive(Accounts)]
pub struct SubmitTransaction<'info> {
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
        init,
        payer = owner,
        space = 8 + PendingAction::INIT_SPACE,
        seeds = [
            PendingAction::SEED_PREFIX,
            company.key().as_ref(),
            &company.transaction_count.to_le_bytes()
        ],
        bump
    )]
    pub action: Account<'info, PendingAction>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, company.key().as_ref()],
        bump = company.treasury_bump
    )]
    pub treasury: SystemAccount<'info>,

    /// CHECK: Only credited with lamports; must equal the action target when
    /// the submission executes an `External` or `DestroyCompany` action.
    #[account(mut)]
    pub recipient: Option<UncheckedAccount<'info>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TransactionSubmitted {
    pub company: Pubkey,
    pub id: u64,
    pub kind: ActionKind,
    pub target: Pubkey,
    pub value: u64,
    pub payload_hash: [u8; 32],
    pub submitter: Pubkey,
}
