use soroban_sdk::{contracttype, Address};

/// Same shape as the auction's `LinearDecay`, passed through as-is.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinearDecay {
    pub ceiling: i128,
    pub step: i128,
    pub floor: i128,
}

/// Same shape as the auction's `PriceDecay`, passed through as-is.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PriceDecay {
    Reciprocal(i128),
    ClampedLinear(LinearDecay),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionRecord {
    /// Auction contract selling the token
    pub auction: Address,
    pub sale_token: Address,
    pub quantity: i128,
    /// Ledger sequence at creation
    pub created_block: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    ReserveToken, // Shared by every auction
    Auction(Address), // sale token -> AuctionRecord
    AuctionCount,
    Initialized,
}
