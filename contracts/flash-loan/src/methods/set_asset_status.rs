use flash_loan_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_asset_config, write_asset_config};

use super::utils::validation::require_admin;

pub fn set_asset_status(
    env: &Env,
    who: &Address,
    asset: &Address,
    enabled: bool,
) -> Result<(), Error> {
    require_admin(env, who)?;

    let mut config = read_asset_config(env, asset)?;
    config.enabled = enabled;

    write_asset_config(env, asset, &config);
    event::asset_status(env, asset, enabled);

    Ok(())
}
