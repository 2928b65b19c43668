use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::TREASURY_SEED;
use crate::error::CompanyError;

/// The account passed to receive a payout must be the action's target.
pub fn check_recipient(
    provided: Option<&Pubkey>,
    expected: &Pubkey,
) -> std::result::Result<(), CompanyError> {
    match provided {
        None => Err(CompanyError::MissingRecipient),
        Some(key) if key != expected => Err(CompanyError::RecipientMismatch),
        Some(_) => Ok(()),
    }
}

/// Pay `lamports` out of a company treasury PDA, signed with its seeds.
pub fn pay_from_treasury<'info>(
    treasury: &SystemAccount<'info>,
    recipient: AccountInfo<'info>,
    system_program: &Program<'info, System>,
    company: &Pubkey,
    treasury_bump: u8,
    lamports: u64,
) -> Result<()> {
    let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_SEED, company.as_ref(), &[treasury_bump]]];
    system_program::transfer(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            Transfer {
                from: treasury.to_account_info(),
                to: recipient,
            },
            signer_seeds,
        ),
        lamports,
    )
}
