use flash_loan_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_admin, read_pending_admin, remove_pending_admin, write_admin};

pub fn accept_admin(env: &Env, who: &Address) -> Result<(), Error> {
    let previous = read_admin(env)?;
    let pending = read_pending_admin(env).ok_or(Error::NoPendingAdmin)?;

    who.require_auth();

    if pending != *who {
        return Err(Error::Unauthorized);
    }

    write_admin(env, who);
    remove_pending_admin(env);
    event::admin_changed(env, &previous, who);

    Ok(())
}
