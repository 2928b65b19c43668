use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::VESTING_LOCK_BPS;
use crate::error::CompanyError;
use crate::state::{HolderBalance, Ledger};
use crate::utils::time::{bps_of, is_after_vesting_end, vested_amount};

/// One-time launch flag of the company-wide vesting schedule.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct VestingSchedule {
    pub launched: bool,
    pub start_ts: Option<i64>,
}

impl VestingSchedule {
    pub fn is_launched(&self) -> bool {
        self.launched
    }

    /// Lock `VESTING_LOCK_BPS` of every holder's liquid balance, starting at `start_ts`.
    pub fn launch(&mut self, ledger: &mut Ledger, start_ts: i64) -> Result<(), CompanyError> {
        if self.launched {
            return Err(CompanyError::AlreadyLaunched);
        }
        let mut staged = ledger.clone();
        for holder in staged.holders_mut() {
            lock_share(holder, start_ts)?;
        }
        staged.reconcile()?;

        *ledger = staged;
        self.launched = true;
        self.start_ts = Some(start_ts);
        Ok(())
    }
}

/// Move the locked share of `holder.current` into the lock and stamp `lock_start`.
pub(crate) fn lock_share(holder: &mut HolderBalance, start_ts: i64) -> Result<(), CompanyError> {
    let lock = bps_of(holder.current, VESTING_LOCK_BPS)?;
    holder.current = holder
        .current
        .checked_sub(lock)
        .ok_or(CompanyError::MathOverflow)?;
    holder.locked = holder
        .locked
        .checked_add(lock)
        .ok_or(CompanyError::MathOverflow)?;
    holder.vesting_total = holder
        .vesting_total
        .checked_add(lock)
        .ok_or(CompanyError::MathOverflow)?;
    if holder.lock_start.is_none() {
        holder.lock_start = Some(start_ts);
    }
    Ok(())
}

/// What `release` would unlock for `holder` at `now_ts`.
pub fn releasable(holder: &HolderBalance, now_ts: i64) -> Result<u64, CompanyError> {
    let lock_start = holder.lock_start.ok_or(CompanyError::NoScheduleLaunched)?;
    if is_after_vesting_end(now_ts, lock_start) {
        return Ok(holder.locked);
    }
    let vested = vested_amount(holder.vesting_total, lock_start, now_ts)?;
    // A clock read earlier than a previous release vests less than was released.
    Ok(vested.saturating_sub(holder.released).min(holder.locked))
}

impl Ledger {
    /// Self-service unlock of `owner`'s vested shares. Returns the amount moved.
    pub fn release(&mut self, owner: &Pubkey, now_ts: i64) -> Result<u64, CompanyError> {
        let holder = self.holder_mut(owner).ok_or(CompanyError::NotAnOwner)?;
        let amount = releasable(holder, now_ts)?;
        if amount == 0 {
            return Ok(0);
        }
        holder.locked -= amount;
        holder.current = holder
            .current
            .checked_add(amount)
            .ok_or(CompanyError::MathOverflow)?;
        holder.released = holder
            .released
            .checked_add(amount)
            .ok_or(CompanyError::MathOverflow)?;
        self.reconcile()?;
        Ok(amount)
    }

    /// Read-only counterpart of `release`.
    pub fn quote_release(&self, owner: &Pubkey, now_ts: i64) -> Result<u64, CompanyError> {
        let holder = self.holder(owner).ok_or(CompanyError::NotAnOwner)?;
        releasable(holder, now_ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SECONDS_PER_DAY, TOTAL_SUPPLY, VESTING_DURATION_SECS};

    const START: i64 = 1_767_225_600;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn launched(founders: &[Pubkey]) -> (VestingSchedule, Ledger) {
        let mut ledger = Ledger::genesis(founders).unwrap();
        let mut schedule = VestingSchedule::default();
        schedule.launch(&mut ledger, START).unwrap();
        (schedule, ledger)
    }

    #[test]
    fn launch_splits_every_holder() {
        let (schedule, ledger) = launched(&[key(1), key(2)]);
        assert!(schedule.is_launched());
        assert_eq!(schedule.start_ts, Some(START));

        let a = ledger.get_holder_balance(&key(1)).unwrap();
        let b = ledger.get_holder_balance(&key(2)).unwrap();
        // 1_000_000 each: 20% liquid, 80% locked.
        assert_eq!(a.current, 200_000);
        assert_eq!(a.locked, 800_000);
        assert_eq!(a.vesting_total, 800_000);
        assert_eq!(a.lock_start, Some(START));
        assert_eq!((a.current, a.locked), (b.current, b.locked));
        ledger.reconcile().unwrap();
    }

    #[test]
    fn launch_is_one_time() {
        let (mut schedule, mut ledger) = launched(&[key(1)]);
        let before = ledger.clone();
        assert!(matches!(
            schedule.launch(&mut ledger, START + 1),
            Err(CompanyError::AlreadyLaunched)
        ));
        assert_eq!(ledger, before);
    }

    #[test]
    fn release_requires_a_lock() {
        let mut ledger = Ledger::genesis(&[key(1)]).unwrap();
        assert!(matches!(
            ledger.release(&key(1), START),
            Err(CompanyError::NoScheduleLaunched)
        ));
        assert!(matches!(
            ledger.release(&key(7), START),
            Err(CompanyError::NotAnOwner)
        ));
    }

    #[test]
    fn release_after_ten_days() {
        let (_, mut ledger) = launched(&[key(1), key(2)]);
        let before = ledger.get_holder_balance(&key(1)).unwrap();

        let now = START + 10 * SECONDS_PER_DAY;
        let moved = ledger.release(&key(1), now).unwrap();
        // floor(800_000 * 10 / 1460)
        assert_eq!(moved, 5_479);

        let after = ledger.get_holder_balance(&key(1)).unwrap();
        assert_eq!(after.current, before.current + moved);
        assert_eq!(after.locked, before.locked - moved);
        assert_eq!(after.total_balance().unwrap(), before.total_balance().unwrap());

        // Same instant again: nothing further.
        assert_eq!(ledger.release(&key(1), now).unwrap(), 0);
        // Clock reading earlier than the last release: nothing, no underflow.
        assert_eq!(ledger.release(&key(1), now - SECONDS_PER_DAY).unwrap(), 0);
    }

    #[test]
    fn release_everything_after_the_window() {
        let (_, mut ledger) = launched(&[key(1)]);
        ledger.release(&key(1), START + 100 * SECONDS_PER_DAY).unwrap();
        ledger.release(&key(1), START + VESTING_DURATION_SECS + 1).unwrap();
        let h = ledger.get_holder_balance(&key(1)).unwrap();
        assert_eq!(h.locked, 0);
        assert_eq!(h.released, h.vesting_total);
        assert_eq!(h.current + ledger.equity_pool, TOTAL_SUPPLY);
    }

    #[test]
    fn quote_matches_release() {
        let (_, mut ledger) = launched(&[key(1)]);
        let now = START + 365 * SECONDS_PER_DAY;
        let quoted = ledger.quote_release(&key(1), now).unwrap();
        assert_eq!(ledger.release(&key(1), now).unwrap(), quoted);
        assert_eq!(ledger.quote_release(&key(1), now).unwrap(), 0);
    }
}
