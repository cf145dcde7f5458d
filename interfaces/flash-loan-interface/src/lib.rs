#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Bytes, BytesN, Env};
use types::asset_config::AssetConfig;
use types::error::Error;
use types::fee_schedule::FeeSchedule;
use types::loan_quote::LoanQuote;

pub mod types;

pub struct Spec;

/// Interface for flash loan pool
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "FlashLoanClient")]
pub trait FlashLoanTrait {
    /// One-time setup of an upgradeable instance.
    /// `asset` is registered as the first pooled asset when provided.
    fn initialize(
        env: Env,
        governance: Address,
        comptroller: Address,
        oracle: Address,
        fee_schedule: FeeSchedule,
        asset: Option<Address>,
    ) -> Result<(), Error>;

    fn upgrade(env: Env, who: Address, new_wasm_hash: BytesN<32>) -> Result<(), Error>;

    fn version() -> u32;

    fn storage_version(env: Env) -> u32;

    fn implementation(env: Env) -> Option<BytesN<32>>;

    fn admin(env: Env) -> Result<Address, Error>;

    fn pending_admin(env: Env) -> Option<Address>;

    fn propose_admin(env: Env, who: Address, new_admin: Address) -> Result<(), Error>;

    fn accept_admin(env: Env, who: Address) -> Result<(), Error>;

    fn set_fee_schedule(env: Env, who: Address, schedule: FeeSchedule) -> Result<(), Error>;

    fn fee_schedule(env: Env) -> Result<FeeSchedule, Error>;

    fn set_comptroller(env: Env, who: Address, comptroller: Address) -> Result<(), Error>;

    fn comptroller(env: Env) -> Result<Address, Error>;

    fn set_oracle(env: Env, who: Address, oracle: Address) -> Result<(), Error>;

    fn oracle(env: Env) -> Result<Address, Error>;

    fn set_pause(env: Env, who: Address, value: bool) -> Result<(), Error>;

    fn paused(env: Env) -> bool;

    fn add_asset(env: Env, who: Address, asset: Address) -> Result<(), Error>;

    fn set_asset_status(env: Env, who: Address, asset: Address, enabled: bool)
        -> Result<(), Error>;

    fn asset_config(env: Env, asset: Address) -> Option<AssetConfig>;

    fn deposit(env: Env, who: Address, asset: Address, amount: i128) -> Result<(), Error>;

    fn withdraw(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
        to: Address,
    ) -> Result<(), Error>;

    fn balance(env: Env, asset: Address) -> i128;

    fn accrued_fees(env: Env, asset: Address) -> i128;

    fn fee(env: Env, asset: Address, amount: i128) -> Result<i128, Error>;

    fn quote(env: Env, asset: Address, amount: i128) -> Result<LoanQuote, Error>;

    /// Lends `amount` of `asset` to `borrower` and requires `amount + fee`
    /// back before returning. Any failure reverts the whole invocation.
    fn issue(
        env: Env,
        asset: Address,
        amount: i128,
        borrower: Address,
        data: Bytes,
    ) -> Result<(), Error>;
}
