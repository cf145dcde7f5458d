use price_feed_interface::types::asset::Asset;
use soroban_sdk::{contracttype, Address, Env, Symbol};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    StellarPrice(Address),
    OtherPrice(Symbol),
}

fn data_key(asset: &Asset) -> DataKey {
    match asset {
        Asset::Stellar(asset) => DataKey::StellarPrice(asset.clone()),
        Asset::Other(asset) => DataKey::OtherPrice(asset.clone()),
    }
}

pub fn write_asset_price(env: &Env, asset: &Asset, price: i128) {
    env.storage().instance().set(&data_key(asset), &price);
}

pub fn read_asset_price(env: &Env, asset: &Asset) -> Option<i128> {
    env.storage().instance().get(&data_key(asset))
}
