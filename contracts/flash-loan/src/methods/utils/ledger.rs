use flash_loan_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::{read_pool_balance, write_pool_balance};

pub fn balance_of(env: &Env, asset: &Address) -> i128 {
    read_pool_balance(env, asset)
}

pub fn debit(env: &Env, asset: &Address, amount: i128) -> Result<i128, Error> {
    if amount.is_negative() {
        return Err(Error::InvalidAmount);
    }

    let balance = read_pool_balance(env, asset);
    if amount > balance {
        return Err(Error::InsufficientLiquidity);
    }

    let balance_after = balance - amount;
    write_pool_balance(env, asset, balance_after)?;

    Ok(balance_after)
}

pub fn credit(env: &Env, asset: &Address, amount: i128) -> Result<i128, Error> {
    if amount.is_negative() {
        return Err(Error::InvalidAmount);
    }

    let balance_after = read_pool_balance(env, asset)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;
    write_pool_balance(env, asset, balance_after)?;

    Ok(balance_after)
}
