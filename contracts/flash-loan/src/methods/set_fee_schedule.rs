use flash_loan_interface::types::error::Error;
use flash_loan_interface::types::fee_schedule::FeeSchedule;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_fee_schedule;

use super::utils::validation::{require_admin, require_valid_fee_schedule};

pub fn set_fee_schedule(env: &Env, who: &Address, schedule: &FeeSchedule) -> Result<(), Error> {
    require_admin(env, who)?;
    require_valid_fee_schedule(env, schedule);

    write_fee_schedule(env, schedule);
    event::fee_schedule_updated(env, schedule.default_rate);

    Ok(())
}
