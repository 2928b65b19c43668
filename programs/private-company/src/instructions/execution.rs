use anchor_lang::prelude::*;

use crate::error::CompanyError;
use crate::state::{ActionKind, Company, ExecutionOutcome, PendingAction};
use crate::utils::treasury::{check_recipient, pay_from_treasury};

// Shared tail of `submit_transaction` and `confirm_transaction`: the core has
// already marked the action executed and updated the company, so outbound
// lamport transfers happen strictly after all state changes.
pub(crate) fn finish_execution<'info>(
    company: &Company,
    company_key: Pubkey,
    action: &PendingAction,
    outcome: ExecutionOutcome,
    treasury: &SystemAccount<'info>,
    recipient: &Option<UncheckedAccount<'info>>,
    system_program: &Program<'info, System>,
) -> Result<()> {
    emit!(TransactionExecuted {
        company: company_key,
        id: action.id,
        kind: action.kind,
        target: action.target,
        value: action.value,
        confirmations: action.confirmed_by.len() as u8,
    });

    if let Some((to, lamports)) = outcome.payout() {
        let recipient = resolve_recipient(recipient, &to)?;
        pay_from_treasury(
            treasury,
            recipient,
            system_program,
            &company_key,
            company.treasury_bump,
            lamports,
        )?;
    }

    match outcome {
        ExecutionOutcome::External { target, lamports } => {
            emit!(ExternalTransferIssued {
                company: company_key,
                id: action.id,
                target,
                lamports,
            });
        }
        ExecutionOutcome::FounderAdded {
            founder,
            grant,
            locked,
        } => {
            emit!(FounderEquityDistributed {
                company: company_key,
                founder,
                grant,
                locked,
                equity_pool: company.ledger.equity_pool,
                owner_count: company.get_role_member_count(),
            });
        }
        ExecutionOutcome::VestingLaunched { start_ts, holders } => {
            emit!(VestingScheduleLaunched {
                company: company_key,
                start_ts,
                holders,
            });
        }
        ExecutionOutcome::Destroyed {
            beneficiary,
            lamports,
        } => {
            emit!(CompanyDestroyed {
                company: company_key,
                beneficiary,
                swept_lamports: lamports,
            });
        }
    }
    Ok(())
}

fn resolve_recipient<'info>(
    recipient: &Option<UncheckedAccount<'info>>,
    expected: &Pubkey,
) -> Result<AccountInfo<'info>> {
    check_recipient(recipient.as_ref().map(|account| account.key), expected)?;
    recipient
        .as_ref()
        .map(|account| account.to_account_info())
        .ok_or_else(|| CompanyError::MissingRecipient.into())
}

#[event]
pub struct TransactionExecuted {
    pub company: Pubkey,
    pub id: u64,
    pub kind: ActionKind,
    pub target: Pubkey,
    pub value: u64,
    pub confirmations: u8,
}

#[event]
pub struct ExternalTransferIssued {
    pub company: Pubkey,
    pub id: u64,
    pub target: Pubkey,
    pub lamports: u64,
}

#[event]
pub struct FounderEquityDistributed {
    pub company: Pubkey,
    pub founder: Pubkey,
    pub grant: u64,
    pub locked: u64,
    pub equity_pool: u64,
    pub owner_count: u32,
}

#[event]
pub struct VestingScheduleLaunched {
    pub company: Pubkey,
    pub start_ts: i64,
    pub holders: u8,
}

#[event]
pub struct CompanyDestroyed {
    pub company: Pubkey,
    pub beneficiary: Pubkey,
    pub swept_lamports: u64,
}
