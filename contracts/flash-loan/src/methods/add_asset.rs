use flash_loan_interface::types::asset_config::AssetConfig;
use flash_loan_interface::types::error::Error;
use soroban_sdk::{assert_with_error, token, Address, Env};

use crate::event;
use crate::storage::{has_asset_config, write_asset_config};

use super::utils::validation::require_admin;

pub fn add_asset(env: &Env, who: &Address, asset: &Address) -> Result<(), Error> {
    require_admin(env, who)?;

    do_add_asset(env, asset)
}

pub fn do_add_asset(env: &Env, asset: &Address) -> Result<(), Error> {
    assert_with_error!(
        env,
        !has_asset_config(env, asset),
        Error::AssetAlreadyExists
    );

    let decimals = token::Client::new(env, asset).decimals();

    write_asset_config(
        env,
        asset,
        &AssetConfig {
            decimals,
            enabled: true,
        },
    );
    event::asset_added(env, asset, decimals);

    Ok(())
}
