use flash_loan_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_pause;

use super::utils::validation::require_admin;

pub fn set_pause(env: &Env, who: &Address, value: bool) -> Result<(), Error> {
    require_admin(env, who)?;

    write_pause(env, value);
    event::paused(env, value);

    Ok(())
}
