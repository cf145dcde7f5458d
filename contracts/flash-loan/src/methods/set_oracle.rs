use flash_loan_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_oracle;

use super::utils::validation::require_admin;

pub fn set_oracle(env: &Env, who: &Address, oracle: &Address) -> Result<(), Error> {
    require_admin(env, who)?;

    write_oracle(env, oracle);
    event::oracle_updated(env, oracle);

    Ok(())
}
