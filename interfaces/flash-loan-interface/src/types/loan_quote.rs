use soroban_sdk::contracttype;

#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanQuote {
    pub fee: i128,
    /// Oracle price of one whole asset unit
    pub price: i128,
    /// Loan amount valued in oracle base asset, with oracle decimals
    pub value: i128,
}
