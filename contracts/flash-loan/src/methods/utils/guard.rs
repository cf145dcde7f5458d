use flash_loan_interface::types::error::Error;
use soroban_sdk::Env;

use crate::storage::{in_flight, remove_in_flight, write_in_flight};

/// Marks a flash loan as in flight for as long as it is alive.
/// Defence in depth: the host already aborts a receiver calling back into the pool,
/// so `ReentrantCall` is only seen when the flag outlives a loan.
pub struct FlashLoanGuard<'a> {
    env: &'a Env,
}

impl<'a> FlashLoanGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, Error> {
        if in_flight(env) {
            return Err(Error::ReentrantCall);
        }

        write_in_flight(env);

        Ok(Self { env })
    }
}

impl<'a> Drop for FlashLoanGuard<'a> {
    fn drop(&mut self) {
        remove_in_flight(self.env);
    }
}
