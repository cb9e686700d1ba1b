use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct AuctionCreatedEvent {
    pub auction: Address,
    pub sale_token: Address,
    pub quantity: i128,
    pub start_block: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AuctionRetiredEvent {
    pub auction: Address,
    pub sale_token: Address,
}
