use soroban_sdk::{contracttype, Address, Symbol};

/// Oracle quoted asset, pool assets are always `Stellar` token contracts
#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    Stellar(Address),
    Other(Symbol),
}
