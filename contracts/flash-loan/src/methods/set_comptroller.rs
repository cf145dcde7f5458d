use flash_loan_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_comptroller;

use super::utils::validation::require_admin;

pub fn set_comptroller(env: &Env, who: &Address, comptroller: &Address) -> Result<(), Error> {
    require_admin(env, who)?;

    write_comptroller(env, comptroller);
    event::comptroller_updated(env, comptroller);

    Ok(())
}
