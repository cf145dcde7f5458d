pub mod accept_admin;
pub mod add_asset;
pub mod deposit;
pub mod initialize;
pub mod issue;
pub mod propose_admin;
pub mod quote;
pub mod set_asset_status;
pub mod set_comptroller;
pub mod set_fee_schedule;
pub mod set_oracle;
pub mod set_pause;
pub mod upgrade;
pub mod utils;
pub mod withdraw;
