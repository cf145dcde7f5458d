use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Limit(Address),
    Blocked(Address),
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn write_limit(env: &Env, asset: &Address, limit: i128) {
    env.storage()
        .instance()
        .set(&DataKey::Limit(asset.clone()), &limit);
}

pub fn read_limit(env: &Env, asset: &Address) -> Option<i128> {
    env.storage().instance().get(&DataKey::Limit(asset.clone()))
}

pub fn write_blocked(env: &Env, borrower: &Address, blocked: bool) {
    env.storage()
        .instance()
        .set(&DataKey::Blocked(borrower.clone()), &blocked);
}

pub fn read_blocked(env: &Env, borrower: &Address) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Blocked(borrower.clone()))
        .unwrap_or(false)
}
