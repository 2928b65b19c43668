use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::{MAX_OWNERS, TOTAL_SUPPLY};
use crate::error::CompanyError;

/// Equity position of a single owner.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct HolderBalance {
    pub owner: Pubkey,
    /// Spendable (transferable) shares.
    pub current: u64,
    /// Shares still held by the vesting lock.
    pub locked: u64,
    /// Everything ever placed under the lock; the base of the linear unlock.
    pub vesting_total: u64,
    /// Portion of `vesting_total` already moved back to `current`.
    pub released: u64,
    /// Unix seconds when this holder's lock started; set once.
    pub lock_start: Option<i64>,
}

impl HolderBalance {
    fn new(owner: Pubkey, current: u64) -> Self {
        Self {
            owner,
            current,
            ..Self::default()
        }
    }

    /// current + locked.
    pub fn total_balance(&self) -> Result<u64, CompanyError> {
        self.current
            .checked_add(self.locked)
            .ok_or(CompanyError::MathOverflow)
    }
}

/// Closed cap table: balances only ever move between recognized owners.
///
/// Invariant (checked after every mutation):
/// `sum(holder.total_balance) + equity_pool == total_supply`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct Ledger {
    /// Fixed at genesis.
    pub total_supply: u64,
    /// Shares reserved for founders admitted after genesis.
    pub equity_pool: u64,
    /// Shares carved out of the pool for each admitted founder.
    pub founder_grant: u64,
    #[max_len(10)]
    holders: Vec<HolderBalance>,
}

impl Ledger {
    /// Genesis distribution of the program-wide supply.
    pub fn genesis(founders: &[Pubkey]) -> Result<Self, CompanyError> {
        Self::genesis_with(TOTAL_SUPPLY, founders)
    }

    /// Cut `total_supply` into `MAX_OWNERS` equal seats. Each founder takes
    /// one; unfilled seats and the integer-division remainder form the pool,
    /// and every later founder is granted exactly one seat from it.
    pub fn genesis_with(total_supply: u64, founders: &[Pubkey]) -> Result<Self, CompanyError> {
        if founders.is_empty() {
            return Err(CompanyError::EmptyOwnerSet);
        }
        if founders.len() > MAX_OWNERS {
            return Err(CompanyError::TooManyOwners);
        }

        let seat = total_supply / MAX_OWNERS as u64;
        if seat == 0 {
            return Err(CompanyError::InvalidAmount);
        }
        let seated = seat
            .checked_mul(founders.len() as u64)
            .ok_or(CompanyError::MathOverflow)?;
        let equity_pool = total_supply
            .checked_sub(seated)
            .ok_or(CompanyError::MathOverflow)?;

        let mut holders = Vec::with_capacity(MAX_OWNERS);
        for founder in founders {
            if holders.iter().any(|h: &HolderBalance| h.owner == *founder) {
                return Err(CompanyError::DuplicateOwner);
            }
            holders.push(HolderBalance::new(*founder, seat));
        }

        let ledger = Self {
            total_supply,
            equity_pool,
            founder_grant: seat,
            holders,
        };
        ledger.reconcile()?;
        Ok(ledger)
    }

    pub fn holders(&self) -> &[HolderBalance] {
        &self.holders
    }

    pub fn holder(&self, owner: &Pubkey) -> Option<&HolderBalance> {
        self.holders.iter().find(|h| h.owner == *owner)
    }

    pub(crate) fn holder_mut(&mut self, owner: &Pubkey) -> Option<&mut HolderBalance> {
        self.holders.iter_mut().find(|h| h.owner == *owner)
    }

    pub(crate) fn holders_mut(&mut self) -> &mut [HolderBalance] {
        &mut self.holders
    }

    /// Snapshot of one owner's position.
    pub fn get_holder_balance(&self, owner: &Pubkey) -> Result<HolderBalance, CompanyError> {
        self.holder(owner).copied().ok_or(CompanyError::NotAnOwner)
    }

    /// Total (current + locked) shares of `owner`; zero for strangers.
    pub fn balance_of(&self, owner: &Pubkey) -> Result<u64, CompanyError> {
        match self.holder(owner) {
            Some(h) => h.total_balance(),
            None => Ok(0),
        }
    }

    /// Move `amount` of spendable shares between two owners.
    pub fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<(), CompanyError> {
        if amount == 0 {
            return Err(CompanyError::InvalidAmount);
        }
        let source = self.holder(from).ok_or(CompanyError::NotAnOwner)?;
        if self.holder(to).is_none() {
            return Err(CompanyError::NotAnOwnerTransferTarget);
        }
        if amount > source.current {
            return Err(CompanyError::InsufficientBalance);
        }
        if from == to {
            return Ok(());
        }

        let dest_current = self
            .holder(to)
            .map(|h| h.current)
            .unwrap_or_default()
            .checked_add(amount)
            .ok_or(CompanyError::MathOverflow)?;

        if let Some(src) = self.holder_mut(from) {
            src.current -= amount;
        }
        if let Some(dst) = self.holder_mut(to) {
            dst.current = dest_current;
        }
        self.reconcile()
    }

    /// Open a position for a newly admitted owner, funded from the pool.
    /// Supply is not minted: the pool shrinks by exactly `amount`.
    pub fn credit_new_owner(&mut self, owner: Pubkey, amount: u64) -> Result<(), CompanyError> {
        if self.holder(&owner).is_some() {
            return Err(CompanyError::DuplicateOwner);
        }
        if self.holders.len() >= MAX_OWNERS {
            return Err(CompanyError::TooManyOwners);
        }
        if amount > self.equity_pool {
            return Err(CompanyError::EquityPoolExhausted);
        }
        self.equity_pool -= amount;
        self.holders.push(HolderBalance::new(owner, amount));
        self.reconcile()
    }

    /// Recompute the supply equation.
    pub fn reconcile(&self) -> Result<(), CompanyError> {
        let mut sum: u128 = self.equity_pool as u128;
        for h in &self.holders {
            if h.released > h.vesting_total {
                return Err(CompanyError::LedgerInvariantViolation);
            }
            sum = sum
                .checked_add(h.current as u128)
                .and_then(|s| s.checked_add(h.locked as u128))
                .ok_or(CompanyError::LedgerInvariantViolation)?;
        }
        if sum != self.total_supply as u128 {
            return Err(CompanyError::LedgerInvariantViolation);
        }
        Ok(())
    }
}
