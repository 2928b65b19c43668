use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::{MAX_NAME_LEN, MAX_TICKER_LEN, QUORUM_POLICY};
use crate::error::CompanyError;
use crate::state::vesting::lock_share;
use crate::state::{
    ActionKind, CircuitBreaker, HolderBalance, Ledger, OwnerSet, PendingAction, QuorumPolicy,
    VestingSchedule,
};

/// A founder-governed company instance.
/// Seeds: [b"company", creator.key(), index.to_le_bytes()]
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Company {
    /// Signer of `create_company`; part of the PDA seeds.
    pub creator: Pubkey,
    /// Position in the creator's registry; part of the PDA seeds.
    pub index: u64,
    #[max_len(32)]
    pub name: String,
    #[max_len(8)]
    pub ticker: String,
    pub owners: OwnerSet,
    pub ledger: Ledger,
    pub vesting: VestingSchedule,
    pub breaker: CircuitBreaker,
    /// Number of actions ever submitted; the next action id.
    pub transaction_count: u64,
    /// Terminal flag set by an executed `DestroyCompany`.
    pub destroyed: bool,
    pub created_at: i64,
    pub bump: u8,
    pub treasury_bump: u8,
}

/// Runtime inputs the core needs but cannot read itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionEnv {
    pub now_ts: i64,
    /// Lamports currently held by the company treasury.
    pub treasury_balance: u64,
    /// Rent-exempt minimum of the (data-less) treasury account. A non-empty
    /// treasury may never drop below it.
    pub rent_floor: u64,
}

/// Effect of an executed action. Outbound transfers are described here and
/// issued by the caller only after the new state has been committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionOutcome {
    External { target: Pubkey, lamports: u64 },
    FounderAdded { founder: Pubkey, grant: u64, locked: u64 },
    VestingLaunched { start_ts: i64, holders: u8 },
    /// `lamports` is the whole treasury, swept to `beneficiary`.
    Destroyed { beneficiary: Pubkey, lamports: u64 },
}

impl ExecutionOutcome {
    /// Outbound treasury transfer this outcome requires, if any.
    pub fn payout(&self) -> Option<(Pubkey, u64)> {
        match *self {
            ExecutionOutcome::External { target, lamports } => Some((target, lamports)),
            ExecutionOutcome::Destroyed {
                beneficiary,
                lamports,
            } if lamports > 0 => Some((beneficiary, lamports)),
            _ => None,
        }
    }
}

/// Dashboard summary returned by `get_company_overview`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CompanyOverview {
    pub name: String,
    pub ticker: String,
    pub total_supply: u64,
    pub equity_pool: u64,
    pub founder_grant: u64,
    pub owner_count: u32,
    pub transaction_count: u64,
    pub vesting_schedule: bool,
    pub stopped: bool,
}

impl Company {
    pub const SEED_PREFIX: &'static [u8] = b"company";

    /// Fresh instance with `founders` sharing the distributable supply.
    #[allow(clippy::too_many_arguments)]
    pub fn genesis(
        creator: Pubkey,
        index: u64,
        name: String,
        ticker: String,
        founders: &[Pubkey],
        now_ts: i64,
        bump: u8,
        treasury_bump: u8,
    ) -> Result<Self, CompanyError> {
        if name.len() > MAX_NAME_LEN {
            return Err(CompanyError::NameTooLong);
        }
        if ticker.len() > MAX_TICKER_LEN {
            return Err(CompanyError::TickerTooLong);
        }
        let owners = OwnerSet::from_founders(founders)?;
        let ledger = Ledger::genesis(owners.members())?;

        let company = Self {
            creator,
            index,
            name,
            ticker,
            owners,
            ledger,
            vesting: VestingSchedule::default(),
            breaker: CircuitBreaker::default(),
            transaction_count: 0,
            destroyed: false,
            created_at: now_ts,
            bump,
            treasury_bump,
        };
        company.check_invariants()?;
        Ok(company)
    }

    pub fn ensure_live(&self) -> Result<(), CompanyError> {
        if self.destroyed {
            Err(CompanyError::InstanceDestroyed)
        } else {
            Ok(())
        }
    }

    /// Live instance and `who` is a founder.
    pub fn ensure_owner(&self, who: &Pubkey) -> Result<(), CompanyError> {
        self.ensure_live()?;
        self.owners.ensure_owner(who)
    }

    pub fn is_owner(&self, who: &Pubkey) -> bool {
        self.owners.contains(who)
    }

    pub fn get_role_member_count(&self) -> u32 {
        self.owners.len() as u32
    }

    pub fn founders(&self) -> &[Pubkey] {
        self.owners.members()
    }

    pub fn vesting_schedule(&self) -> bool {
        self.vesting.is_launched()
    }

    pub fn stopped(&self) -> bool {
        self.breaker.stopped
    }

    pub fn get_equity_holder_balance(&self, owner: &Pubkey) -> Result<HolderBalance, CompanyError> {
        self.ensure_live()?;
        self.ledger.get_holder_balance(owner)
    }

    pub fn overview(&self) -> CompanyOverview {
        CompanyOverview {
            name: self.name.clone(),
            ticker: self.ticker.clone(),
            total_supply: self.ledger.total_supply,
            equity_pool: self.ledger.equity_pool,
            founder_grant: self.ledger.founder_grant,
            owner_count: self.get_role_member_count(),
            transaction_count: self.transaction_count,
            vesting_schedule: self.vesting_schedule(),
            stopped: self.stopped(),
        }
    }

    /// Owner set and cap table describe the same people, and the ledger reconciles.
    pub fn check_invariants(&self) -> Result<(), CompanyError> {
        if self.owners.is_empty() {
            return Err(CompanyError::EmptyOwnerSet);
        }
        let holders = self.ledger.holders();
        if holders.len() != self.owners.len()
            || holders.iter().any(|h| !self.owners.contains(&h.owner))
        {
            return Err(CompanyError::LedgerInvariantViolation);
        }
        self.ledger.reconcile()
    }

    pub fn stop(&mut self, caller: &Pubkey) -> Result<bool, CompanyError> {
        self.ensure_owner(caller)?;
        Ok(self.breaker.stop())
    }

    pub fn resume(&mut self, caller: &Pubkey) -> Result<bool, CompanyError> {
        self.ensure_owner(caller)?;
        Ok(self.breaker.resume())
    }

    /// Create the next action, confirmed by `caller`. With a single owner it
    /// executes immediately.
    #[allow(clippy::too_many_arguments)]
    pub fn submit_transaction(
        &mut self,
        company_key: Pubkey,
        caller: Pubkey,
        kind: ActionKind,
        target: Pubkey,
        value: u64,
        payload: &[u8],
        env: &ExecutionEnv,
        bump: u8,
    ) -> Result<(PendingAction, Option<ExecutionOutcome>), CompanyError> {
        self.ensure_owner(&caller)?;
        self.breaker.ensure_running()?;
        self.validate_request(kind, &target, value)?;

        let mut action = PendingAction::open(
            company_key,
            self.transaction_count,
            kind,
            target,
            value,
            payload,
            caller,
            self.owners.len(),
            env.now_ts,
            bump,
        )?;

        let mut staged = self.clone();
        staged.transaction_count = staged
            .transaction_count
            .checked_add(1)
            .ok_or(CompanyError::MathOverflow)?;
        let outcome = staged.settle(QUORUM_POLICY, &mut action, env)?;

        *self = staged;
        Ok((action, outcome))
    }

    /// Add `caller`'s confirmation to `action`; executes it once quorum is met.
    pub fn confirm_transaction(
        &mut self,
        company_key: Pubkey,
        action: &mut PendingAction,
        caller: Pubkey,
        env: &ExecutionEnv,
    ) -> Result<Option<ExecutionOutcome>, CompanyError> {
        self.confirm_with(QUORUM_POLICY, company_key, action, caller, env)
    }

    fn confirm_with(
        &mut self,
        policy: QuorumPolicy,
        company_key: Pubkey,
        action: &mut PendingAction,
        caller: Pubkey,
        env: &ExecutionEnv,
    ) -> Result<Option<ExecutionOutcome>, CompanyError> {
        self.ensure_owner(&caller)?;
        self.breaker.ensure_running()?;
        self.ensure_known_action(company_key, action)?;

        let mut staged_action = action.clone();
        staged_action.record_confirmation(caller)?;

        let mut staged = self.clone();
        let outcome = staged.settle(policy, &mut staged_action, env)?;

        *self = staged;
        *action = staged_action;
        Ok(outcome)
    }

    /// `UnknownAction` for ids this company never issued.
    pub fn ensure_known_action(
        &self,
        company_key: Pubkey,
        action: &PendingAction,
    ) -> Result<(), CompanyError> {
        if action.company != company_key {
            return Err(CompanyError::ActionCompanyMismatch);
        }
        if action.id >= self.transaction_count {
            return Err(CompanyError::UnknownAction);
        }
        Ok(())
    }

    fn settle(
        &mut self,
        policy: QuorumPolicy,
        action: &mut PendingAction,
        env: &ExecutionEnv,
    ) -> Result<Option<ExecutionOutcome>, CompanyError> {
        if action.reaches_quorum(policy, self.owners.len()) {
            self.execute(action, env).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Early rejection of requests that could never execute.
    fn validate_request(
        &self,
        kind: ActionKind,
        target: &Pubkey,
        value: u64,
    ) -> Result<(), CompanyError> {
        match kind {
            ActionKind::External => {
                require_target(target)?;
                if value == 0 {
                    return Err(CompanyError::InvalidAmount);
                }
                Ok(())
            }
            ActionKind::NewFounder => self.owners.check_admissible(target),
            ActionKind::LaunchVestingSchedule => {
                if self.vesting.is_launched() {
                    Err(CompanyError::AlreadyLaunched)
                } else {
                    Ok(())
                }
            }
            ActionKind::DestroyCompany => require_target(target),
        }
    }

    /// Mark executed, then apply the effect. Callers stage `self` and commit on `Ok`.
    fn execute(
        &mut self,
        action: &mut PendingAction,
        env: &ExecutionEnv,
    ) -> Result<ExecutionOutcome, CompanyError> {
        action.mark_executed(env.now_ts);

        let outcome = match action.kind {
            ActionKind::External => {
                let left = env
                    .treasury_balance
                    .checked_sub(action.value)
                    .ok_or(CompanyError::InsufficientTreasury)?;
                if left > 0 && left < env.rent_floor {
                    return Err(CompanyError::InsufficientTreasury);
                }
                ExecutionOutcome::External {
                    target: action.target,
                    lamports: action.value,
                }
            }
            ActionKind::NewFounder => self.admit_founder(action.target, env.now_ts)?,
            ActionKind::LaunchVestingSchedule => {
                self.vesting.launch(&mut self.ledger, env.now_ts)?;
                ExecutionOutcome::VestingLaunched {
                    start_ts: env.now_ts,
                    holders: self.ledger.holders().len() as u8,
                }
            }
            ActionKind::DestroyCompany => {
                self.destroyed = true;
                ExecutionOutcome::Destroyed {
                    beneficiary: action.target,
                    lamports: env.treasury_balance,
                }
            }
        };

        self.check_invariants()?;
        Ok(outcome)
    }

    fn admit_founder(&mut self, founder: Pubkey, now_ts: i64) -> Result<ExecutionOutcome, CompanyError> {
        self.owners.check_admissible(&founder)?;
        let grant = self.ledger.founder_grant;
        self.ledger.credit_new_owner(founder, grant)?;
        self.owners.add(founder)?;

        let mut locked = 0;
        if self.vesting.is_launched() {
            let holder = self
                .ledger
                .holder_mut(&founder)
                .ok_or(CompanyError::LedgerInvariantViolation)?;
            lock_share(holder, now_ts)?;
            locked = holder.locked;
        }
        Ok(ExecutionOutcome::FounderAdded {
            founder,
            grant,
            locked,
        })
    }

    /// Self-service unlock; not gated by the breaker.
    pub fn release_vested_equity(&mut self, caller: &Pubkey, now_ts: i64) -> Result<u64, CompanyError> {
        self.ensure_live()?;
        self.ledger.release(caller, now_ts)
    }

    pub fn quote_vested_equity(&self, owner: &Pubkey, now_ts: i64) -> Result<u64, CompanyError> {
        self.ensure_live()?;
        self.ledger.quote_release(owner, now_ts)
    }

    pub fn transfer_equity(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<(), CompanyError> {
        self.ensure_live()?;
        self.ledger.transfer(from, to, amount)
    }

    /// Checks a treasury deposit; the treasury must end rent-exempt.
    pub fn check_deposit(&self, amount: u64, env: &ExecutionEnv) -> Result<(), CompanyError> {
        self.ensure_live()?;
        if amount == 0 {
            return Err(CompanyError::InvalidAmount);
        }
        let after = env
            .treasury_balance
            .checked_add(amount)
            .ok_or(CompanyError::MathOverflow)?;
        if after < env.rent_floor {
            return Err(CompanyError::DepositBelowRentFloor);
        }
        Ok(())
    }
}

fn require_target(target: &Pubkey) -> Result<(), CompanyError> {
    if *target == Pubkey::default() {
        Err(CompanyError::InvalidPubkey)
    } else {
        Ok(())
    }
}
