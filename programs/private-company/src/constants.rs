//! Program-wide constants.

use crate::state::QuorumPolicy;

/// Basis-point denominator used by every ratio below.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Fixed cap-table size of every company, in whole shares.
pub const TOTAL_SUPPLY: u64 = 10_000_000;

/// Share of each holder's liquid balance moved into the vesting lock at launch.
pub const VESTING_LOCK_BPS: u64 = 8_000;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Linear unlock window: 1460 days.
pub const VESTING_DURATION_SECS: i64 = 1_460 * SECONDS_PER_DAY;

/// Owner-set capacity of a single company; the supply is cut into this many
/// equal seats.
/// Keep in sync with the `max_len` annotations on `OwnerSet` and `Ledger`.
pub const MAX_OWNERS: usize = 10;

/// Companies a single creator can register.
/// Keep in sync with the `max_len` annotation on `CreatorRegistry`.
pub const MAX_INSTANCES_PER_CREATOR: usize = 32;

/// Company name limit in bytes.
pub const MAX_NAME_LEN: usize = 32;

/// Ticker limit in bytes.
pub const MAX_TICKER_LEN: usize = 8;

/// Confirmation threshold used when deciding whether a pending action executes.
pub const QUORUM_POLICY: QuorumPolicy = QuorumPolicy::CurrentOwners;

/// Treasury PDA seed prefix: `["treasury", company]`.
pub const TREASURY_SEED: &[u8] = b"treasury";
