pub mod asset_config;
pub mod error;
pub mod fee_schedule;
pub mod loan_quote;
pub mod settlement;
