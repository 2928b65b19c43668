//! Randomised operation sequences against the company state machine.

use anchor_lang::prelude::Pubkey;
use proptest::prelude::*;
use private_company::constants::{MAX_OWNERS, SECONDS_PER_DAY, TOTAL_SUPPLY, VESTING_DURATION_SECS};
use private_company::state::{ActionKind, Company, ExecutionEnv, PendingAction};
use private_company::utils::time::vested_amount;

const GENESIS: i64 = 1_767_225_600;
const COMPANY: Pubkey = Pubkey::new_from_array([100; 32]);
const TREASURY: u64 = 1_000_000;
const RENT_FLOOR: u64 = 890_880;

fn key(n: u8) -> Pubkey {
    Pubkey::new_from_array([n; 32])
}

fn kind(n: u8) -> ActionKind {
    match n {
        0 => ActionKind::External,
        1 => ActionKind::NewFounder,
        2 => ActionKind::LaunchVestingSchedule,
        _ => ActionKind::DestroyCompany,
    }
}

#[derive(Debug, Clone)]
enum Op {
    Submit { caller: u8, kind: u8, target: u8, value: u64 },
    Confirm { caller: u8, pick: usize },
    Release { caller: u8, days: i64 },
    Transfer { from: u8, to: u8, amount: u64 },
    Stop { caller: u8 },
    Resume { caller: u8 },
}

// Keys 1..=3 are founders at genesis; 4..=7 are outsiders who may be admitted.
fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (1u8..=7, 0u8..3, 1u8..=7, 0u64..2_000_000).prop_map(|(caller, kind, target, value)| {
            Op::Submit { caller, kind, target, value }
        }),
        1 => (1u8..=7, 1u8..=7).prop_map(|(caller, target)| Op::Submit {
            caller,
            kind: 3,
            target,
            value: 0
        }),
        6 => (1u8..=7, any::<usize>()).prop_map(|(caller, pick)| Op::Confirm { caller, pick }),
        4 => (1u8..=7, 0i64..400).prop_map(|(caller, days)| Op::Release { caller, days }),
        4 => (1u8..=7, 1u8..=7, 0u64..4_000_000).prop_map(|(from, to, amount)| Op::Transfer {
            from,
            to,
            amount
        }),
        1 => (1u8..=7).prop_map(|caller| Op::Stop { caller }),
        1 => (1u8..=7).prop_map(|caller| Op::Resume { caller }),
    ]
}

fn genesis() -> Company {
    Company::genesis(
        key(50),
        0,
        "Crypto Private Company".to_string(),
        "CPC".to_string(),
        &[key(1), key(2), key(3)],
        GENESIS,
        255,
        254,
    )
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn supply_is_conserved_and_failures_leave_no_trace(ops in prop::collection::vec(arb_op(), 1..80)) {
        let mut company = genesis();
        let mut actions: Vec<PendingAction> = Vec::new();
        let mut now = GENESIS;

        for op in ops {
            let before = company.clone();
            let env = ExecutionEnv { now_ts: now, treasury_balance: TREASURY, rent_floor: RENT_FLOOR };

            match op {
                Op::Submit { caller, kind: k, target, value } => {
                    let result = company.submit_transaction(
                        COMPANY,
                        key(caller),
                        kind(k),
                        key(target),
                        value,
                        &[k],
                        &env,
                        0,
                    );
                    match result {
                        Ok((action, _)) => {
                            prop_assert_eq!(action.id as usize, actions.len());
                            prop_assert_eq!(company.transaction_count, before.transaction_count + 1);
                            actions.push(action);
                        }
                        Err(_) => prop_assert_eq!(&company, &before),
                    }
                }
                Op::Confirm { caller, pick } => {
                    if actions.is_empty() {
                        continue;
                    }
                    let idx = pick % actions.len();
                    let action_before = actions[idx].clone();
                    match company.confirm_transaction(COMPANY, &mut actions[idx], key(caller), &env) {
                        Ok(outcome) => {
                            prop_assert_eq!(actions[idx].confirmations(), action_before.confirmations() + 1);
                            prop_assert_eq!(outcome.is_some(), actions[idx].executed);
                        }
                        Err(_) => {
                            prop_assert_eq!(&company, &before);
                            prop_assert_eq!(&actions[idx], &action_before);
                        }
                    }
                }
                Op::Release { caller, days } => {
                    now += days * SECONDS_PER_DAY;
                    let holder_before = company.ledger.holder(&key(caller)).copied();
                    match company.release_vested_equity(&key(caller), now) {
                        Ok(amount) => {
                            let h0 = holder_before.unwrap();
                            let h1 = company.ledger.holder(&key(caller)).copied().unwrap();
                            prop_assert_eq!(h1.current, h0.current + amount);
                            prop_assert_eq!(h1.locked, h0.locked - amount);
                            prop_assert!(h1.released <= h1.vesting_total);
                        }
                        Err(_) => prop_assert_eq!(&company, &before),
                    }
                }
                Op::Transfer { from, to, amount } => {
                    let pair_before = company.ledger.balance_of(&key(from)).unwrap()
                        + company.ledger.balance_of(&key(to)).unwrap();
                    match company.transfer_equity(&key(from), &key(to), amount) {
                        Ok(()) => {
                            let pair_after = company.ledger.balance_of(&key(from)).unwrap()
                                + company.ledger.balance_of(&key(to)).unwrap();
                            prop_assert_eq!(pair_before, pair_after);
                        }
                        Err(_) => prop_assert_eq!(&company, &before),
                    }
                }
                Op::Stop { caller } => {
                    if company.stop(&key(caller)).is_err() {
                        prop_assert_eq!(&company, &before);
                    }
                }
                Op::Resume { caller } => {
                    if company.resume(&key(caller)).is_err() {
                        prop_assert_eq!(&company, &before);
                    }
                }
            }

            prop_assert!(company.check_invariants().is_ok());
            prop_assert_eq!(company.ledger.total_supply, TOTAL_SUPPLY);
            prop_assert!(company.owners.len() <= MAX_OWNERS);
            prop_assert!(company.ledger.holders().iter().all(|h| company.is_owner(&h.owner)));
            prop_assert!(company.transaction_count >= before.transaction_count);
            if before.destroyed {
                prop_assert_eq!(&company, &before);
            }
        }
    }

    #[test]
    fn vesting_never_decreases_and_never_overshoots(
        locked in 0u64..=TOTAL_SUPPLY,
        t1 in 0i64..(2 * VESTING_DURATION_SECS),
        dt in 0i64..VESTING_DURATION_SECS,
    ) {
        let early = vested_amount(locked, GENESIS, GENESIS + t1).unwrap();
        let late = vested_amount(locked, GENESIS, GENESIS + t1 + dt).unwrap();
        prop_assert!(early <= late);
        prop_assert!(late <= locked);
        if t1 + dt >= VESTING_DURATION_SECS {
            prop_assert_eq!(late, locked);
        }
    }

    #[test]
    fn stepwise_releases_match_a_single_release(splits in prop::collection::vec(1i64..200, 1..12)) {
        let mut stepwise = Company::genesis(
            key(50),
            0,
            "Solo".to_string(),
            "SOLO".to_string(),
            &[key(1)],
            GENESIS,
            255,
            254,
        )
        .unwrap();
        let launch_env = ExecutionEnv { now_ts: GENESIS, treasury_balance: 0, rent_floor: RENT_FLOOR };
        stepwise
            .submit_transaction(COMPANY, key(1), ActionKind::LaunchVestingSchedule, key(1), 0, &[], &launch_env, 0)
            .unwrap();
        let mut single = stepwise.clone();

        let mut now = GENESIS;
        let mut total = 0;
        for days in &splits {
            now += days * SECONDS_PER_DAY;
            total += stepwise.release_vested_equity(&key(1), now).unwrap();
        }
        let once = single.release_vested_equity(&key(1), now).unwrap();

        prop_assert_eq!(total, once);
        prop_assert_eq!(stepwise.ledger.holder(&key(1)), single.ledger.holder(&key(1)));
    }
}
