use flash_loan_interface::types::error::Error;
use flash_loan_interface::types::loan_quote::LoanQuote;
use price_feed_interface::types::asset::Asset;
use price_feed_interface::PriceFeedClient;
use soroban_sdk::{Address, Env};

use crate::storage::{read_fee_schedule, read_oracle};

use super::utils::fee::compute_fee;
use super::utils::validation::{
    require_enabled_asset, require_initialized, require_positive_amount,
};

pub fn fee(env: &Env, asset: &Address, amount: i128) -> Result<i128, Error> {
    require_initialized(env);
    require_positive_amount(env, amount);
    require_enabled_asset(env, asset)?;

    compute_fee(&read_fee_schedule(env)?, asset, amount)
}

pub fn quote(env: &Env, asset: &Address, amount: i128) -> Result<LoanQuote, Error> {
    let fee = fee(env, asset, amount)?;
    let config = require_enabled_asset(env, asset)?;

    let oracle = PriceFeedClient::new(env, &read_oracle(env)?);
    let price = oracle
        .lastprice(&Asset::Stellar(asset.clone()))
        .map(|data| data.price)
        .filter(|price| *price > 0)
        .ok_or(Error::NoPriceForAsset)?;

    let value = amount
        .checked_mul(price)
        .ok_or(Error::MathOverflowError)?
        .checked_div(10i128.checked_pow(config.decimals).ok_or(Error::MathOverflowError)?)
        .ok_or(Error::MathOverflowError)?;

    Ok(LoanQuote { fee, price, value })
}
