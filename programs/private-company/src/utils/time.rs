//! Linear vesting utilities (integer, floor-rounded).
//! - elapsed = clamp(now - lock_start, 0, VESTING_DURATION_SECS)
//! - vested  = floor(total_locked * elapsed / VESTING_DURATION_SECS)
//! - vested reaches total_locked exactly at lock_start + VESTING_DURATION_SECS

use crate::constants::{BPS_DENOMINATOR, VESTING_DURATION_SECS};
use crate::error::CompanyError;

/// Seconds of the vesting window that have passed, clamped to the window.
/// A clock that reads earlier than `lock_start` counts as zero elapsed.
pub fn elapsed_in_window(now_ts: i64, lock_start: i64) -> i64 {
    now_ts
        .saturating_sub(lock_start)
        .clamp(0, VESTING_DURATION_SECS)
}

/// Amount of `total_locked` unlocked at `now_ts` for a lock starting at `lock_start`.
pub fn vested_amount(total_locked: u64, lock_start: i64, now_ts: i64) -> Result<u64, CompanyError> {
    let elapsed = elapsed_in_window(now_ts, lock_start);
    if elapsed >= VESTING_DURATION_SECS {
        return Ok(total_locked);
    }
    let v = (total_locked as u128)
        .checked_mul(elapsed as u128)
        .ok_or(CompanyError::MathOverflow)?
        / (VESTING_DURATION_SECS as u128);
    u64::try_from(v).map_err(|_| CompanyError::MathOverflow)
}

/// True once the whole locked amount is unlocked.
pub fn is_after_vesting_end(now_ts: i64, lock_start: i64) -> bool {
    elapsed_in_window(now_ts, lock_start) >= VESTING_DURATION_SECS
}

/// floor(amount * bps / 10_000).
pub fn bps_of(amount: u64, bps: u64) -> Result<u64, CompanyError> {
    let v = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(CompanyError::MathOverflow)?
        / (BPS_DENOMINATOR as u128);
    u64::try_from(v).map_err(|_| CompanyError::MathOverflow)
}
