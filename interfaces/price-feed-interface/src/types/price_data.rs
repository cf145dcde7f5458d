use soroban_sdk::contracttype;

/// Price in oracle base asset with oracle `decimals`, stamped with ledger time
#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
}
