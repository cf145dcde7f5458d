#![deny(warnings)]
#![no_std]

use flash_loan_interface::types::fee_schedule::FeeSchedule;
use flash_loan_interface::FlashLoanClient;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};


#[contract]
pub struct Deployer;

#[contractimpl]
impl Deployer {
    /// Deploy the flash loan pool wasm and invoke its `initialize` function
    /// within the same invocation, so the instance is never observable uninitialized.
    /// Returns the contract ID.
    #[allow(clippy::too_many_arguments)]
    pub fn deploy_pool(
        env: Env,
        salt: BytesN<32>,
        wasm_hash: BytesN<32>,
        governance: Address,
        comptroller: Address,
        oracle: Address,
        fee_schedule: FeeSchedule,
        asset: Option<Address>,
    ) -> Address {
        let id = env.deployer().with_current_contract(salt).deploy(wasm_hash);

        FlashLoanClient::new(&env, &id).initialize(
            &governance,
            &comptroller,
            &oracle,
            &fee_schedule,
            &asset,
        );

        id
    }
}
