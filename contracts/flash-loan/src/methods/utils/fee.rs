use common::FixedI128;
use flash_loan_interface::types::error::Error;
use flash_loan_interface::types::fee_schedule::FeeSchedule;
use soroban_sdk::Address;

/// Fee charged for borrowing `amount` of `asset`.
/// Rounded up to the next unit.
pub fn compute_fee(schedule: &FeeSchedule, asset: &Address, amount: i128) -> Result<i128, Error> {
    FixedI128::from_fee_rate(schedule.rate(asset))
        .ok_or(Error::MathOverflowError)?
        .mul_int_ceil(amount)
        .ok_or(Error::MathOverflowError)
}
