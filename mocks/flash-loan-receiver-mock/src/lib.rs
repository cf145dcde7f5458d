#![deny(warnings)]
#![no_std]

use flash_loan_interface::FlashLoanClient;
use flash_loan_receiver_interface::FlashLoanReceiverTrait;
use soroban_sdk::{contract, contractimpl, token, Address, Bytes, Env};
use storage::{
    has_pool, read_governance, read_mode, read_pool, write_governance, write_mode, write_pool,
};

pub use storage::RepayMode;

mod storage;

pub trait TestFlashLoanTrait {
    fn initialize(env: Env, pool: Address, governance: Address);

    fn set_mode(env: Env, mode: RepayMode);

    fn mode(env: Env) -> RepayMode;
}

#[contract]
pub struct TestFlashLoan;

#[contractimpl]
impl FlashLoanReceiverTrait for TestFlashLoan {
    fn on_flash_loan(env: Env, asset: Address, amount: i128, fee: i128, data: Bytes) -> bool {
        let pool = read_pool(&env);
        let this = env.current_contract_address();

        let repayment = match read_mode(&env) {
            RepayMode::Full => amount + fee,
            RepayMode::PrincipalOnly => amount,
            RepayMode::Surplus(extra) => amount + fee + extra,
            RepayMode::Reenter => {
                FlashLoanClient::new(&env, &pool).issue(&asset, &amount, &this, &data);
                amount + fee
            }
            RepayMode::Reject => return false,
        };

        token::Client::new(&env, &asset).transfer(&this, &pool, &repayment);

        true
    }
}

#[contractimpl]
impl TestFlashLoanTrait for TestFlashLoan {
    fn initialize(env: Env, pool: Address, governance: Address) {
        if has_pool(&env) {
            panic!("already initialized");
        }

        write_pool(&env, &pool);
        write_governance(&env, &governance);
        write_mode(&env, &RepayMode::Full);
    }

    fn set_mode(env: Env, mode: RepayMode) {
        read_governance(&env).require_auth();
        write_mode(&env, &mode);
    }

    fn mode(env: Env) -> RepayMode {
        read_mode(&env)
    }
}
