use comptroller_interface::ComptrollerClient;
use flash_loan_interface::types::error::Error;
use flash_loan_interface::types::settlement::SettlementOutcome;
use flash_loan_receiver_interface::FlashLoanReceiverClient;
use soroban_sdk::{log, token, Address, Bytes, Env};

use crate::event;
use crate::storage::{add_accrued_fees, read_comptroller, read_fee_schedule};

use super::utils::fee::compute_fee;
use super::utils::guard::FlashLoanGuard;
use super::utils::ledger;
use super::utils::validation::{
    require_enabled_asset, require_initialized, require_not_paused, require_positive_amount,
};

pub fn issue(
    env: &Env,
    asset: &Address,
    amount: i128,
    borrower: &Address,
    data: &Bytes,
) -> Result<(), Error> {
    require_initialized(env);
    require_not_paused(env);
    require_positive_amount(env, amount);
    require_enabled_asset(env, asset)?;

    let guard = FlashLoanGuard::acquire(env)?;

    borrower.require_auth();

    let comptroller = ComptrollerClient::new(env, &read_comptroller(env)?);
    if !comptroller.approve(borrower, asset, &amount) {
        return Err(Error::RiskRejected);
    }

    let balance_before = ledger::balance_of(env, asset);
    if amount > balance_before {
        return Err(Error::InsufficientLiquidity);
    }

    let fee = compute_fee(&read_fee_schedule(env)?, asset, amount)?;
    let required = balance_before
        .checked_add(fee)
        .ok_or(Error::MathOverflowError)?;

    let pool = env.current_contract_address();
    let underlying = token::Client::new(env, asset);

    ledger::debit(env, asset, amount)?;
    underlying.transfer(&pool, borrower, &amount);
    let token_balance_lent = underlying.balance(&pool);

    let receiver = FlashLoanReceiverClient::new(env, borrower);
    if !receiver.on_flash_loan(asset, &amount, &fee, data) {
        log!(
            env,
            "flash loan {}: receiver rejected",
            SettlementOutcome::RolledBack
        );
        return Err(Error::ReceiverRejected);
    }

    let returned = underlying
        .balance(&pool)
        .checked_sub(token_balance_lent)
        .ok_or(Error::MathOverflowError)?;

    if returned.is_positive() {
        ledger::credit(env, asset, returned)?;
    }

    let balance_after = ledger::balance_of(env, asset);
    if balance_after < required {
        log!(
            env,
            "flash loan {}: repaid {}, borrowed {} with fee {}",
            SettlementOutcome::RolledBack,
            returned,
            amount,
            fee
        );
        return Err(Error::RepaymentShortfall);
    }

    drop(guard);

    add_accrued_fees(env, asset, fee)?;
    event::flash_loan(env, asset, borrower, amount, fee, balance_after - required);

    Ok(())
}
