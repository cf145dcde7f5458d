#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Bytes, Env};

pub struct Spec;

/// Borrower callback invoked by the pool while a flash loan is in flight.
/// The receiver must transfer `amount + fee` of `asset` back to the pool
/// before returning `true`.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "FlashLoanReceiverClient")]
pub trait FlashLoanReceiverTrait {
    fn on_flash_loan(env: Env, asset: Address, amount: i128, fee: i128, data: Bytes) -> bool;
}
