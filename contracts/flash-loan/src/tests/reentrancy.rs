#![cfg(test)]
extern crate std;

use flash_loan_interface::types::error::Error;
use flash_loan_receiver_mock::RepayMode;
use soroban_sdk::{Bytes, Env, InvokeError};

use crate::storage::{in_flight, write_in_flight};
use crate::tests::sut::{fill_pool, init_pool, BORROWER_FUNDS, POOL_LIQUIDITY};

#[test]
fn should_fail_when_receiver_reenters() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    fill_pool(&env, &sut);

    sut.borrower.set_mode(&RepayMode::Reenter);

    let result = sut.pool.try_issue(
        &sut.asset(),
        &1_000,
        &sut.borrower.address,
        &Bytes::new(&env),
    );

    // nested call into the pool is aborted by the host before it reaches the guard
    assert_eq!(result, Err(Err(InvokeError::Abort)));
    assert_eq!(sut.pool.balance(&sut.asset()), POOL_LIQUIDITY);
    assert_eq!(sut.token.balance(&sut.pool.address), POOL_LIQUIDITY);
    assert_eq!(sut.token.balance(&sut.borrower.address), BORROWER_FUNDS);
    assert_eq!(sut.pool.accrued_fees(&sut.asset()), 0);
    assert!(!env.as_contract(&sut.pool.address, || in_flight(&env)));
}

#[test]
fn should_fail_when_loan_is_in_flight() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    fill_pool(&env, &sut);

    env.as_contract(&sut.pool.address, || write_in_flight(&env));

    let result = sut.pool.try_issue(
        &sut.asset(),
        &1_000,
        &sut.borrower.address,
        &Bytes::new(&env),
    );

    assert_eq!(result, Err(Ok(Error::ReentrantCall)));
    assert_eq!(sut.pool.balance(&sut.asset()), POOL_LIQUIDITY);
    assert_eq!(sut.token.balance(&sut.borrower.address), BORROWER_FUNDS);
}

#[test]
fn should_release_guard_after_settlement() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    fill_pool(&env, &sut);

    for _ in 0..2 {
        sut.pool.issue(
            &sut.asset(),
            &1_000,
            &sut.borrower.address,
            &Bytes::new(&env),
        );
        assert!(!env.as_contract(&sut.pool.address, || in_flight(&env)));
    }

    assert_eq!(sut.pool.accrued_fees(&sut.asset()), 2);
    assert_eq!(sut.pool.balance(&sut.asset()), POOL_LIQUIDITY + 2);
}

#[test]
fn should_release_guard_after_rollback() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    fill_pool(&env, &sut);

    sut.borrower.set_mode(&RepayMode::PrincipalOnly);

    let result = sut.pool.try_issue(
        &sut.asset(),
        &1_000,
        &sut.borrower.address,
        &Bytes::new(&env),
    );

    assert_eq!(result, Err(Ok(Error::RepaymentShortfall)));
    assert!(!env.as_contract(&sut.pool.address, || in_flight(&env)));

    sut.borrower.set_mode(&RepayMode::Full);
    sut.pool.issue(
        &sut.asset(),
        &1_000,
        &sut.borrower.address,
        &Bytes::new(&env),
    );

    assert_eq!(sut.pool.balance(&sut.asset()), POOL_LIQUIDITY + 1);
}
