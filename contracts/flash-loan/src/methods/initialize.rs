use flash_loan_interface::types::error::Error;
use flash_loan_interface::types::fee_schedule::FeeSchedule;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{
    write_admin, write_comptroller, write_fee_schedule, write_initialized, write_oracle,
    write_storage_version, STORAGE_VERSION,
};

use super::add_asset::do_add_asset;
use super::utils::validation::{require_not_initialized, require_valid_fee_schedule};

pub fn initialize(
    env: &Env,
    governance: &Address,
    comptroller: &Address,
    oracle: &Address,
    fee_schedule: &FeeSchedule,
    asset: &Option<Address>,
) -> Result<(), Error> {
    require_not_initialized(env);
    require_valid_fee_schedule(env, fee_schedule);

    write_initialized(env);
    write_storage_version(env, STORAGE_VERSION);
    write_admin(env, governance);
    write_comptroller(env, comptroller);
    write_oracle(env, oracle);
    write_fee_schedule(env, fee_schedule);

    if let Some(asset) = asset {
        do_add_asset(env, asset)?;
    }

    event::initialized(env, governance, comptroller, oracle);

    Ok(())
}
