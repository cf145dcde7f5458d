#![deny(warnings)]
#![no_std]

use comptroller_interface::ComptrollerTrait;
use soroban_sdk::{contract, contractimpl, Address, Env};
use storage::*;

mod storage;

pub trait ComptrollerAdminTrait {
    fn initialize(env: Env, admin: Address);

    /// Caps a single loan of `asset`, unlimited when never set
    fn set_limit(env: Env, asset: Address, limit: i128);

    fn set_blocked(env: Env, borrower: Address, blocked: bool);
}

#[contract]
pub struct ComptrollerMock;

#[contractimpl]
impl ComptrollerTrait for ComptrollerMock {
    fn approve(env: Env, borrower: Address, asset: Address, amount: i128) -> bool {
        if read_blocked(&env, &borrower) {
            return false;
        }

        read_limit(&env, &asset).map_or(true, |limit| amount <= limit)
    }
}

#[contractimpl]
impl ComptrollerAdminTrait for ComptrollerMock {
    fn initialize(env: Env, admin: Address) {
        if has_admin(&env) {
            panic!("already initialized");
        }

        write_admin(&env, &admin);
    }

    fn set_limit(env: Env, asset: Address, limit: i128) {
        read_admin(&env).require_auth();
        write_limit(&env, &asset, limit);
    }

    fn set_blocked(env: Env, borrower: Address, blocked: bool) {
        read_admin(&env).require_auth();
        write_blocked(&env, &borrower, blocked);
    }
}
