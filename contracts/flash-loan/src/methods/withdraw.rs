use flash_loan_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

use crate::event;
use crate::storage::read_asset_config;

use super::utils::ledger;
use super::utils::validation::{require_admin, require_positive_amount};

pub fn withdraw(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
    to: &Address,
) -> Result<(), Error> {
    require_admin(env, who)?;
    require_positive_amount(env, amount);
    read_asset_config(env, asset)?;

    ledger::debit(env, asset, amount)?;
    token::Client::new(env, asset).transfer(&env.current_contract_address(), to, &amount);

    event::withdraw(env, who, asset, to, amount);

    Ok(())
}
