#![deny(warnings)]
#![no_std]

use flash_loan_interface::types::fee_schedule::FeeSchedule;
use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env};

/// Subset of the pool keys. Keys are matched by variant name, not position.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Implementation,
    StorageVersion,
    Admin,
    FeeSchedule,
    PoolBalance(Address),
    AccruedFees(Address),
}

#[contract]
pub struct FlashLoanV2Mock;

#[contractimpl]
impl FlashLoanV2Mock {
    pub fn version() -> u32 {
        2
    }

    pub fn storage_version(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::StorageVersion)
            .unwrap_or(0)
    }

    pub fn implementation(env: Env) -> Option<BytesN<32>> {
        env.storage().instance().get(&DataKey::Implementation)
    }

    pub fn admin(env: Env) -> Address {
        env.storage().instance().get(&DataKey::Admin).unwrap()
    }

    pub fn fee_schedule(env: Env) -> FeeSchedule {
        env.storage().instance().get(&DataKey::FeeSchedule).unwrap()
    }

    pub fn balance(env: Env, asset: Address) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::PoolBalance(asset))
            .unwrap_or(0)
    }

    pub fn accrued_fees(env: Env, asset: Address) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::AccruedFees(asset))
            .unwrap_or(0)
    }
}
