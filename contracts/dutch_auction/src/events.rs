use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct AuctionStartedEvent {
    pub sale_token: Address,
    pub quantity: i128,
    pub start_block: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct BidPlacedEvent {
    pub bidder: Address,
    pub offered: i128,
    pub accepted: i128,
    pub price: i128,
    pub received_total: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AuctionFinalizedEvent {
    pub final_price: i128,
    pub received_total: i128,
    pub end_block: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ClaimedEvent {
    pub bidder: Address,
    pub bid_amount: i128,
    pub tokens: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AuctionClosedEvent {
    pub tokens_claimed: i128,
    pub swept: i128,
}
