use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Unauthorized = 2,
    Paused = 3,
    NoPendingAdmin = 4,

    UnknownAsset = 100,
    AssetAlreadyExists = 101,
    NoPriceForAsset = 102,

    InvalidAmount = 200,
    InsufficientLiquidity = 201,
    RiskRejected = 202,
    ReceiverRejected = 203,
    RepaymentShortfall = 204,
    ReentrantCall = 205,

    MathOverflowError = 300,
    InvalidFeeRate = 301,
}
