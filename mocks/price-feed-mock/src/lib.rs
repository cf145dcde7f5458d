#![deny(warnings)]
#![no_std]

mod storage;

use crate::storage::*;
use price_feed_interface::types::{asset::Asset, price_data::PriceData};
use price_feed_interface::PriceFeedTrait;
use soroban_sdk::{contract, contractimpl, Env};

pub const DECIMALS: u32 = 14;

pub trait PriceFeedAdminTrait {
    /// Sets price in base asset for a given asset. Note: not a SEP-40 method.
    fn set_price(env: Env, asset: Asset, price: i128);
}

#[contract]
pub struct PriceFeedMock;

#[contractimpl]
impl PriceFeedTrait for PriceFeedMock {
    fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    fn lastprice(env: Env, asset: Asset) -> Option<PriceData> {
        read_asset_price(&env, &asset).map(|price| PriceData {
            price,
            timestamp: env.ledger().timestamp(),
        })
    }
}

#[contractimpl]
impl PriceFeedAdminTrait for PriceFeedMock {
    fn set_price(env: Env, asset: Asset, price: i128) {
        write_asset_price(&env, &asset, price);
    }
}
