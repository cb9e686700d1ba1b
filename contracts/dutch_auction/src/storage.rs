use soroban_sdk::{contracttype, Address};

const DAY_IN_LEDGERS: u32 = 17_280;

/// Bid entries are persistent, one per bidder, extended on every write.
pub const BID_TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub const BID_TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    /// Bound to a token and quantity, price clock not running
    Created = 0,
    /// Price clock running, bids accepted until the target is met
    Started = 1,
    /// Price locked, claims allowed
    Finalized = 2,
    /// Every bid claimed, remainder swept back to the registry
    Closed = 3,
}

/// Linear decay from `ceiling`, pinned at `floor` once reached.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinearDecay {
    /// Price at the start block (already scaled)
    pub ceiling: i128,
    /// Price drop per elapsed block
    pub step: i128,
    /// Lowest price the curve can reach
    pub floor: i128,
}

/// Price-decay policy, fixed per auction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PriceDecay {
    /// `start_price × scale / (elapsed + 1)`
    Reciprocal(i128),
    /// `max(ceiling - step × elapsed, floor)`
    ClampedLinear(LinearDecay),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    /// Creator, controlling party and beneficiary of the proceeds
    pub registry: Address,
    /// Currency bidders pay with
    pub reserve_token: Address,
    /// Token on sale
    pub sale_token: Address,
    /// Sale token units on offer
    pub quantity: i128,
    /// 10^decimals of the sale token
    pub scale: i128,
    pub decay: PriceDecay,
    pub status: AuctionStatus,
    /// Ledger sequence captured at start
    pub start_block: u32,
    /// Ledger sequence captured at finalize
    pub end_block: u32,
    /// Reserve currency accepted across all bids
    pub received_total: i128,
    /// Distinct bidders
    pub bid_count: u32,
    /// Price locked at finalize
    pub final_price: i128,
    /// Sale token units paid out through claims
    pub tokens_claimed: i128,
    /// Reserve amounts whose claim has been settled
    pub bids_claimed: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Auction,
    Bid(Address), // persistent: bidder -> cumulative accepted reserve amount
}
