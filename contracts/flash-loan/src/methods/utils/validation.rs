use common::FEE_RATE_FACTOR;
use flash_loan_interface::types::asset_config::AssetConfig;
use flash_loan_interface::types::error::Error;
use flash_loan_interface::types::fee_schedule::FeeSchedule;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env};

use crate::storage::{is_initialized, paused, read_admin, read_asset_config};

pub fn require_not_initialized(env: &Env) {
    if is_initialized(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_initialized(env: &Env) {
    assert_with_error!(env, is_initialized(env), Error::Uninitialized);
}

/// Authenticates `who` and checks it is the current administrator
pub fn require_admin(env: &Env, who: &Address) -> Result<(), Error> {
    let admin = read_admin(env)?;
    who.require_auth();

    if admin != *who {
        return Err(Error::Unauthorized);
    }

    Ok(())
}

pub fn require_not_paused(env: &Env) {
    assert_with_error!(env, !paused(env), Error::Paused);
}

pub fn require_positive_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount > 0, Error::InvalidAmount);
}

pub fn require_valid_fee_rate(env: &Env, rate: u32) {
    assert_with_error!(env, rate <= FEE_RATE_FACTOR, Error::InvalidFeeRate);
}

pub fn require_valid_fee_schedule(env: &Env, schedule: &FeeSchedule) {
    require_valid_fee_rate(env, schedule.default_rate);

    for (_, rate) in schedule.rates.iter() {
        require_valid_fee_rate(env, rate);
    }
}

pub fn require_enabled_asset(env: &Env, asset: &Address) -> Result<AssetConfig, Error> {
    let config = read_asset_config(env, asset)?;
    assert_with_error!(env, config.enabled, Error::UnknownAsset);

    Ok(config)
}
