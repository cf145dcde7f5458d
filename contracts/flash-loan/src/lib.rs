#![deny(warnings)]
#![no_std]

use flash_loan_interface::types::{
    asset_config::AssetConfig, error::Error, fee_schedule::FeeSchedule, loan_quote::LoanQuote,
};
use flash_loan_interface::FlashLoanTrait;
use methods::{
    accept_admin::accept_admin, add_asset::add_asset, deposit::deposit,
    initialize::initialize, issue::issue, propose_admin::propose_admin, quote::fee,
    quote::quote, set_asset_status::set_asset_status, set_comptroller::set_comptroller,
    set_fee_schedule::set_fee_schedule, set_oracle::set_oracle, set_pause::set_pause,
    upgrade::upgrade, withdraw::withdraw,
};
use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;

#[contract]
pub struct FlashLoanPool;

#[contractimpl]
impl FlashLoanTrait for FlashLoanPool {
    fn initialize(
        env: Env,
        governance: Address,
        comptroller: Address,
        oracle: Address,
        fee_schedule: FeeSchedule,
        asset: Option<Address>,
    ) -> Result<(), Error> {
        initialize(
            &env,
            &governance,
            &comptroller,
            &oracle,
            &fee_schedule,
            &asset,
        )
    }

    fn upgrade(env: Env, who: Address, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        upgrade(&env, &who, &new_wasm_hash)
    }

    fn version() -> u32 {
        1
    }

    fn storage_version(env: Env) -> u32 {
        read_storage_version(&env)
    }

    fn implementation(env: Env) -> Option<BytesN<32>> {
        read_implementation(&env)
    }

    fn admin(env: Env) -> Result<Address, Error> {
        read_admin(&env)
    }

    fn pending_admin(env: Env) -> Option<Address> {
        read_pending_admin(&env)
    }

    fn propose_admin(env: Env, who: Address, new_admin: Address) -> Result<(), Error> {
        propose_admin(&env, &who, &new_admin)
    }

    fn accept_admin(env: Env, who: Address) -> Result<(), Error> {
        accept_admin(&env, &who)
    }

    fn set_fee_schedule(env: Env, who: Address, schedule: FeeSchedule) -> Result<(), Error> {
        set_fee_schedule(&env, &who, &schedule)
    }

    fn fee_schedule(env: Env) -> Result<FeeSchedule, Error> {
        read_fee_schedule(&env)
    }

    fn set_comptroller(env: Env, who: Address, comptroller: Address) -> Result<(), Error> {
        set_comptroller(&env, &who, &comptroller)
    }

    fn comptroller(env: Env) -> Result<Address, Error> {
        read_comptroller(&env)
    }

    fn set_oracle(env: Env, who: Address, oracle: Address) -> Result<(), Error> {
        set_oracle(&env, &who, &oracle)
    }

    fn oracle(env: Env) -> Result<Address, Error> {
        read_oracle(&env)
    }

    fn set_pause(env: Env, who: Address, value: bool) -> Result<(), Error> {
        set_pause(&env, &who, value)
    }

    fn paused(env: Env) -> bool {
        paused(&env)
    }

    fn add_asset(env: Env, who: Address, asset: Address) -> Result<(), Error> {
        add_asset(&env, &who, &asset)
    }

    fn set_asset_status(
        env: Env,
        who: Address,
        asset: Address,
        enabled: bool,
    ) -> Result<(), Error> {
        set_asset_status(&env, &who, &asset, enabled)
    }

    fn asset_config(env: Env, asset: Address) -> Option<AssetConfig> {
        read_asset_config(&env, &asset).ok()
    }

    fn deposit(env: Env, who: Address, asset: Address, amount: i128) -> Result<(), Error> {
        deposit(&env, &who, &asset, amount)
    }

    fn withdraw(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
        to: Address,
    ) -> Result<(), Error> {
        withdraw(&env, &who, &asset, amount, &to)
    }

    fn balance(env: Env, asset: Address) -> i128 {
        read_pool_balance(&env, &asset)
    }

    fn accrued_fees(env: Env, asset: Address) -> i128 {
        read_accrued_fees(&env, &asset)
    }

    fn fee(env: Env, asset: Address, amount: i128) -> Result<i128, Error> {
        fee(&env, &asset, amount)
    }

    fn quote(env: Env, asset: Address, amount: i128) -> Result<LoanQuote, Error> {
        quote(&env, &asset, amount)
    }

    fn issue(
        env: Env,
        asset: Address,
        amount: i128,
        borrower: Address,
        data: Bytes,
    ) -> Result<(), Error> {
        issue(&env, &asset, amount, &borrower, &data)
    }
}
