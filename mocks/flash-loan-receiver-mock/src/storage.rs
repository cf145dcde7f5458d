use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepayMode {
    /// Returns principal and fee
    Full,
    /// Returns principal only
    PrincipalOnly,
    /// Returns principal, fee and an extra amount
    Surplus(i128),
    /// Requests another loan from inside the callback
    Reenter,
    /// Reports failure without repaying
    Reject,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Pool,
    Governance,
    Mode,
}

pub fn has_pool(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Pool)
}

pub fn write_pool(env: &Env, pool: &Address) {
    env.storage().instance().set(&DataKey::Pool, pool);
}

pub fn read_pool(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Pool).unwrap()
}

pub fn write_governance(env: &Env, governance: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::Governance, governance);
}

pub fn read_governance(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Governance).unwrap()
}

pub fn write_mode(env: &Env, mode: &RepayMode) {
    env.storage().instance().set(&DataKey::Mode, mode);
}

pub fn read_mode(env: &Env) -> RepayMode {
    env.storage()
        .instance()
        .get(&DataKey::Mode)
        .unwrap_or(RepayMode::Full)
}
