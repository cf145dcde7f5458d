use soroban_sdk::contracttype;

#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    pub decimals: u32,
    pub enabled: bool,
}
