#![cfg(test)]
extern crate std;

use flash_loan_interface::types::asset_config::AssetConfig;
use flash_loan_interface::types::error::Error;
use flash_loan_interface::types::fee_schedule::FeeSchedule;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Bytes, Env};

use crate::tests::sut::{create_pool_contract, init_pool, FEE_RATE};

#[test]
fn should_store_configuration() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    assert_eq!(sut.pool.admin(), sut.governance);
    assert_eq!(sut.pool.comptroller(), sut.comptroller.address);
    assert_eq!(sut.pool.oracle(), sut.price_feed.address);
    assert_eq!(sut.pool.fee_schedule(), FeeSchedule::flat(&env, FEE_RATE));
    assert_eq!(sut.pool.pending_admin(), None);
    assert!(!sut.pool.paused());
    assert_eq!(
        sut.pool.asset_config(&sut.asset()),
        Some(AssetConfig {
            decimals: 7,
            enabled: true
        })
    );
    assert_eq!(sut.pool.balance(&sut.asset()), 0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #0)")]
fn should_fail_when_initialized_twice() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    sut.pool.initialize(
        &sut.governance,
        &sut.comptroller.address,
        &sut.price_feed.address,
        &FeeSchedule::flat(&env, FEE_RATE),
        &None,
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #301)")]
fn should_fail_when_fee_rate_exceeds_factor() {
    let env = Env::default();
    env.mock_all_auths();

    let pool = create_pool_contract(&env);

    pool.initialize(
        &Address::generate(&env),
        &Address::generate(&env),
        &Address::generate(&env),
        &FeeSchedule::flat(&env, 1_000_001),
        &None,
    );
}

#[test]
fn should_initialize_without_asset() {
    let env = Env::default();
    env.mock_all_auths();

    let pool = create_pool_contract(&env);
    let governance = Address::generate(&env);

    pool.initialize(
        &governance,
        &Address::generate(&env),
        &Address::generate(&env),
        &FeeSchedule::flat(&env, FEE_RATE),
        &None,
    );

    assert_eq!(pool.admin(), governance);
    assert_eq!(pool.asset_config(&Address::generate(&env)), None);
}

#[test]
fn should_require_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let pool = create_pool_contract(&env);
    let asset = Address::generate(&env);

    assert_eq!(
        pool.try_issue(&asset, &1_000, &Address::generate(&env), &Bytes::new(&env)),
        Err(Ok(Error::Uninitialized))
    );
    assert_eq!(pool.try_admin(), Err(Ok(Error::Uninitialized)));
    assert_eq!(
        pool.try_set_pause(&Address::generate(&env), &true),
        Err(Ok(Error::Uninitialized))
    );
    assert_eq!(
        pool.try_deposit(&Address::generate(&env), &asset, &1_000),
        Err(Ok(Error::Uninitialized))
    );
}
