#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};

pub struct Spec;

/// Risk control module consulted before every flash loan
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "ComptrollerClient")]
pub trait ComptrollerTrait {
    /// Returns true when `borrower` may take `amount` of `asset`
    fn approve(env: Env, borrower: Address, asset: Address, amount: i128) -> bool;
}
