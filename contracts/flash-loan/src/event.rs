use flash_loan_interface::types::settlement::SettlementOutcome;
use soroban_sdk::{symbol_short, Address, BytesN, Env, Symbol};

pub(crate) fn initialized(e: &Env, admin: &Address, comptroller: &Address, oracle: &Address) {
    let topics = (Symbol::new(e, "initialize"), admin, comptroller);
    e.events().publish(topics, oracle.clone());
}

pub(crate) fn upgraded(e: &Env, wasm_hash: &BytesN<32>) {
    let topics = (symbol_short!("upgrade"),);
    e.events().publish(topics, wasm_hash.clone());
}

pub(crate) fn admin_proposed(e: &Env, admin: &Address, pending: &Address) {
    let topics = (Symbol::new(e, "admin_proposed"), admin.clone());
    e.events().publish(topics, pending.clone());
}

pub(crate) fn admin_changed(e: &Env, previous: &Address, admin: &Address) {
    let topics = (Symbol::new(e, "admin_changed"), previous.clone());
    e.events().publish(topics, admin.clone());
}

pub(crate) fn fee_schedule_updated(e: &Env, default_rate: u32) {
    let topics = (Symbol::new(e, "fee_schedule_updated"),);
    e.events().publish(topics, default_rate);
}

pub(crate) fn comptroller_updated(e: &Env, comptroller: &Address) {
    let topics = (Symbol::new(e, "comptroller_updated"),);
    e.events().publish(topics, comptroller.clone());
}

pub(crate) fn oracle_updated(e: &Env, oracle: &Address) {
    let topics = (Symbol::new(e, "oracle_updated"),);
    e.events().publish(topics, oracle.clone());
}

pub(crate) fn paused(e: &Env, value: bool) {
    let topics = (symbol_short!("pause"),);
    e.events().publish(topics, value);
}

pub(crate) fn asset_added(e: &Env, asset: &Address, decimals: u32) {
    let topics = (Symbol::new(e, "asset_added"), asset.clone());
    e.events().publish(topics, decimals);
}

pub(crate) fn asset_status(e: &Env, asset: &Address, enabled: bool) {
    let topics = (Symbol::new(e, "asset_status"), asset.clone());
    e.events().publish(topics, enabled);
}

pub(crate) fn deposit(e: &Env, who: &Address, asset: &Address, amount: i128) {
    let topics = (symbol_short!("deposit"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn withdraw(e: &Env, who: &Address, asset: &Address, to: &Address, amount: i128) {
    let topics = (symbol_short!("withdraw"), who.clone());
    e.events().publish(topics, (to, asset.clone(), amount));
}

pub(crate) fn flash_loan(
    e: &Env,
    asset: &Address,
    borrower: &Address,
    amount: i128,
    fee: i128,
    surplus: i128,
) {
    let topics = (Symbol::new(e, "flash_loan"), asset, borrower);
    e.events()
        .publish(topics, (amount, fee, surplus, SettlementOutcome::Settled));
}
