use flash_loan_interface::types::error::Error;
use soroban_sdk::{Address, BytesN, Env};

use crate::event;
use crate::storage::write_implementation;

use super::utils::validation::require_admin;

pub fn upgrade(env: &Env, who: &Address, new_wasm_hash: &BytesN<32>) -> Result<(), Error> {
    require_admin(env, who)?;

    write_implementation(env, new_wasm_hash);
    event::upgraded(env, new_wasm_hash);

    env.deployer()
        .update_current_contract_wasm(new_wasm_hash.clone());

    Ok(())
}
