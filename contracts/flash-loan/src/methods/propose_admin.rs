use flash_loan_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_pending_admin;

use super::utils::validation::require_admin;

pub fn propose_admin(env: &Env, who: &Address, new_admin: &Address) -> Result<(), Error> {
    require_admin(env, who)?;

    write_pending_admin(env, new_admin);
    event::admin_proposed(env, who, new_admin);

    Ok(())
}
