use soroban_sdk::{contracttype, Address, Env, Map};

/// Flash loan fee rates.
/// Rates are expressed in pips: 0.0001% - 1, 100% - 1_000_000
#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSchedule {
    pub default_rate: u32,
    pub rates: Map<Address, u32>,
}

impl FeeSchedule {
    pub fn flat(env: &Env, rate: u32) -> Self {
        Self {
            default_rate: rate,
            rates: Map::new(env),
        }
    }

    /// Rate applied to `asset`, falls back to the default one
    pub fn rate(&self, asset: &Address) -> u32 {
        self.rates.get(asset.clone()).unwrap_or(self.default_rate)
    }
}
