use flash_loan_interface::types::asset_config::AssetConfig;
use flash_loan_interface::types::error::Error;
use flash_loan_interface::types::fee_schedule::FeeSchedule;
use soroban_sdk::{assert_with_error, contracttype, Address, BytesN, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

/// Layout revision of the keys below, bumped whenever a key is appended
pub(crate) const STORAGE_VERSION: u32 = 1;

/// Keys are encoded by variant name and survive wasm upgrades.
/// New keys may be appended, existing ones must never be renamed or change their value type.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    Implementation,
    StorageVersion,
    Admin,
    PendingAdmin,
    Comptroller,
    Oracle,
    FeeSchedule,
    Pause,
    AssetConfig(Address),
    PoolBalance(Address),
    AccruedFees(Address),
    InFlight,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn is_initialized(env: &Env) -> bool {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn write_initialized(env: &Env) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn write_storage_version(env: &Env, version: u32) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::StorageVersion, &version);
}

pub fn read_storage_version(env: &Env) -> u32 {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::StorageVersion)
        .unwrap_or(0)
}

pub fn write_implementation(env: &Env, wasm_hash: &BytesN<32>) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::Implementation, wasm_hash);
}

pub fn read_implementation(env: &Env) -> Option<BytesN<32>> {
    bump_instance(env);

    env.storage().instance().get(&DataKey::Implementation)
}

pub fn write_admin(env: &Env, admin: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::Uninitialized)
}

pub fn write_pending_admin(env: &Env, admin: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::PendingAdmin, admin);
}

pub fn read_pending_admin(env: &Env) -> Option<Address> {
    bump_instance(env);

    env.storage().instance().get(&DataKey::PendingAdmin)
}

pub fn remove_pending_admin(env: &Env) {
    bump_instance(env);

    env.storage().instance().remove(&DataKey::PendingAdmin);
}

pub fn write_comptroller(env: &Env, comptroller: &Address) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::Comptroller, comptroller);
}

pub fn read_comptroller(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Comptroller)
        .ok_or(Error::Uninitialized)
}

pub fn write_oracle(env: &Env, oracle: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Oracle, oracle);
}

pub fn read_oracle(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Oracle)
        .ok_or(Error::Uninitialized)
}

pub fn write_fee_schedule(env: &Env, schedule: &FeeSchedule) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::FeeSchedule, schedule);
}

pub fn read_fee_schedule(env: &Env) -> Result<FeeSchedule, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::FeeSchedule)
        .ok_or(Error::Uninitialized)
}

pub fn paused(env: &Env) -> bool {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Pause)
        .unwrap_or(false)
}

pub fn write_pause(env: &Env, value: bool) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Pause, &value);
}

pub fn has_asset_config(env: &Env, asset: &Address) -> bool {
    bump_instance(env);

    env.storage()
        .instance()
        .has(&DataKey::AssetConfig(asset.clone()))
}

pub fn read_asset_config(env: &Env, asset: &Address) -> Result<AssetConfig, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::AssetConfig(asset.clone()))
        .ok_or(Error::UnknownAsset)
}

pub fn write_asset_config(env: &Env, asset: &Address, config: &AssetConfig) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::AssetConfig(asset.clone()), config);
}

pub fn read_pool_balance(env: &Env, asset: &Address) -> i128 {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::PoolBalance(asset.clone()))
        .unwrap_or(0i128)
}

pub fn write_pool_balance(env: &Env, asset: &Address, balance: i128) -> Result<(), Error> {
    bump_instance(env);

    assert_with_error!(
        env,
        !balance.is_negative(),
        Error::InsufficientLiquidity
    );

    env.storage()
        .instance()
        .set(&DataKey::PoolBalance(asset.clone()), &balance);

    Ok(())
}

pub fn read_accrued_fees(env: &Env, asset: &Address) -> i128 {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::AccruedFees(asset.clone()))
        .unwrap_or(0i128)
}

pub fn add_accrued_fees(env: &Env, asset: &Address, fee: i128) -> Result<i128, Error> {
    let accrued = read_accrued_fees(env, asset)
        .checked_add(fee)
        .ok_or(Error::MathOverflowError)?;

    env.storage()
        .instance()
        .set(&DataKey::AccruedFees(asset.clone()), &accrued);

    Ok(accrued)
}

pub fn in_flight(env: &Env) -> bool {
    env.storage().temporary().has(&DataKey::InFlight)
}

pub fn write_in_flight(env: &Env) {
    env.storage().temporary().set(&DataKey::InFlight, &true);
}

pub fn remove_in_flight(env: &Env) {
    env.storage().temporary().remove(&DataKey::InFlight);
}
