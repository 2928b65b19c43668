use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::CompanyError;

/// Closed set of effects a governed transaction can have.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum ActionKind {
    /// Pay `value` lamports from the treasury to `target`.
    #[default]
    External,
    /// Admit `target` as a founder with a grant from the equity pool.
    NewFounder,
    /// Start the company-wide vesting schedule.
    LaunchVestingSchedule,
    /// Terminate the company; the treasury is swept to `target`.
    DestroyCompany,
}

/// How many confirmations an action needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuorumPolicy {
    /// Every owner at the time of the triggering call.
    CurrentOwners,
    /// Every owner counted when the action was submitted.
    SnapshotAtSubmission,
}

impl QuorumPolicy {
    pub fn required(self, current_owners: usize, owners_at_submission: u8) -> usize {
        match self {
            QuorumPolicy::CurrentOwners => current_owners,
            QuorumPolicy::SnapshotAtSubmission => owners_at_submission as usize,
        }
    }
}

/// One governance record. PDA: `["action", company, id_le]`.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct PendingAction {
    pub company: Pubkey,
    /// Zero-based, sequential per company.
    pub id: u64,
    pub kind: ActionKind,
    pub target: Pubkey,
    /// Lamports; only meaningful for `External`.
    pub value: u64,
    /// BLAKE3 of the opaque payload.
    pub payload_hash: [u8; 32],
    pub payload_len: u32,
    pub owners_at_submission: u8,
    #[max_len(10)]
    pub confirmed_by: Vec<Pubkey>,
    pub executed: bool,
    pub submitted_at: i64,
    pub executed_at: Option<i64>,
    pub bump: u8,
}

impl PendingAction {
    pub const SEED_PREFIX: &'static [u8] = b"action";

    /// New record, already confirmed by its submitter.
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        company: Pubkey,
        id: u64,
        kind: ActionKind,
        target: Pubkey,
        value: u64,
        payload: &[u8],
        submitter: Pubkey,
        owners_at_submission: usize,
        now_ts: i64,
        bump: u8,
    ) -> Result<Self, CompanyError> {
        Ok(Self {
            company,
            id,
            kind,
            target,
            value,
            payload_hash: *blake3::hash(payload).as_bytes(),
            payload_len: u32::try_from(payload.len()).map_err(|_| CompanyError::MathOverflow)?,
            owners_at_submission: u8::try_from(owners_at_submission)
                .map_err(|_| CompanyError::TooManyOwners)?,
            confirmed_by: vec![submitter],
            executed: false,
            submitted_at: now_ts,
            executed_at: None,
            bump,
        })
    }

    pub fn has_confirmed(&self, who: &Pubkey) -> bool {
        self.confirmed_by.iter().any(|c| c == who)
    }

    pub fn confirmations(&self) -> usize {
        self.confirmed_by.len()
    }

    pub fn ensure_pending(&self) -> Result<(), CompanyError> {
        if self.executed {
            Err(CompanyError::AlreadyExecuted)
        } else {
            Ok(())
        }
    }

    pub(crate) fn record_confirmation(&mut self, who: Pubkey) -> Result<(), CompanyError> {
        self.ensure_pending()?;
        if self.has_confirmed(&who) {
            return Err(CompanyError::AlreadyConfirmed);
        }
        self.confirmed_by.push(who);
        Ok(())
    }

    pub fn reaches_quorum(&self, policy: QuorumPolicy, current_owners: usize) -> bool {
        self.confirmations() >= policy.required(current_owners, self.owners_at_submission)
    }

    pub(crate) fn mark_executed(&mut self, now_ts: i64) {
        self.executed = true;
        self.executed_at = Some(now_ts);
    }

    pub fn details(&self) -> ActionDetails {
        ActionDetails {
            id: self.id,
            kind: self.kind,
            target: self.target,
            value: self.value,
            payload_hash: self.payload_hash,
            payload_len: self.payload_len,
            confirmations: self.confirmed_by.len() as u8,
            confirmed_by: self.confirmed_by.clone(),
            executed: self.executed,
            submitted_at: self.submitted_at,
            executed_at: self.executed_at,
        }
    }
}

/// Read-only snapshot returned by `get_transaction_details`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ActionDetails {
    pub id: u64,
    pub kind: ActionKind,
    pub target: Pubkey,
    pub value: u64,
    pub payload_hash: [u8; 32],
    pub payload_len: u32,
    pub confirmations: u8,
    pub confirmed_by: Vec<Pubkey>,
    pub executed: bool,
    pub submitted_at: i64,
    pub executed_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn action(owners: usize) -> PendingAction {
        PendingAction::open(
            key(100),
            0,
            ActionKind::NewFounder,
            key(9),
            0,
            &[0u8],
            key(1),
            owners,
            1_000,
            255,
        )
        .unwrap()
    }

    #[test]
    fn submitter_is_first_confirmation() {
        let a = action(2);
        assert!(a.has_confirmed(&key(1)));
        assert_eq!(a.confirmations(), 1);
        assert!(!a.executed);
        assert_eq!(a.payload_hash, *blake3::hash(&[0u8]).as_bytes());
        assert_eq!(a.payload_len, 1);
    }

    #[test]
    fn confirmations_are_unique_and_stop_after_execution() {
        let mut a = action(3);
        assert!(matches!(
            a.record_confirmation(key(1)),
            Err(CompanyError::AlreadyConfirmed)
        ));
        a.record_confirmation(key(2)).unwrap();
        a.mark_executed(2_000);
        assert!(matches!(
            a.record_confirmation(key(3)),
            Err(CompanyError::AlreadyExecuted)
        ));
        assert_eq!(a.executed_at, Some(2_000));
    }

    #[test]
    fn quorum_policies_diverge_when_owners_grow() {
        let mut a = action(2);
        a.record_confirmation(key(2)).unwrap();
        // A third owner joined after submission.
        assert!(!a.reaches_quorum(QuorumPolicy::CurrentOwners, 3));
        assert!(a.reaches_quorum(QuorumPolicy::SnapshotAtSubmission, 3));
        assert!(a.reaches_quorum(QuorumPolicy::CurrentOwners, 2));
    }

    #[test]
    fn details_snapshot() {
        let a = action(1);
        let d = a.details();
        assert_eq!(d.id, 0);
        assert_eq!(d.kind, ActionKind::NewFounder);
        assert_eq!(d.target, key(9));
        assert_eq!(d.confirmations, 1);
        assert_eq!(d.confirmed_by, vec![key(1)]);
    }
}
