use flash_loan_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

use crate::event;
use crate::storage::read_asset_config;

use super::utils::ledger;
use super::utils::validation::{require_initialized, require_positive_amount};

pub fn deposit(env: &Env, who: &Address, asset: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_initialized(env);
    require_positive_amount(env, amount);
    read_asset_config(env, asset)?;

    token::Client::new(env, asset).transfer(who, &env.current_contract_address(), &amount);
    ledger::credit(env, asset, amount)?;

    event::deposit(env, who, asset, amount);

    Ok(())
}
