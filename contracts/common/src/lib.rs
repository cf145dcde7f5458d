#![deny(warnings)]
#![no_std]

mod fixedi128;

pub use fixedi128::*;

/// Fee rate representation, 1 - 0.0001%, 1_000_000 - 100%
pub const FEE_RATE_FACTOR: u32 = 1_000_000;
