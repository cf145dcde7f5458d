pub mod fee;
pub mod guard;
pub mod ledger;
pub mod validation;
