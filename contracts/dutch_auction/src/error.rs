use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // LIFECYCLE ERRORS (20-29)
    // ============================================
    /// Auction has not been started yet
    NotStarted = 20,
    /// Auction was already started
    AlreadyStarted = 21,
    /// Auction was already finalized
    AlreadyFinalized = 22,
    /// Auction is not finalized yet
    NotFinalized = 23,
    /// Received total is below the target at the current price
    TargetNotReached = 24,
    /// Auction is closed
    AlreadyClosed = 25,
    /// Some bidders have not claimed yet
    ClaimsOutstanding = 26,
    /// Auction does not hold `quantity` sale tokens
    AuctionNotFunded = 27,

    // ============================================
    // ARGUMENT ERRORS (30-39)
    // ============================================
    /// Quantity must be positive
    InvalidQuantity = 30,
    /// Amount must be positive
    InvalidAmount = 31,
    /// Decay parameters would produce a zero or increasing price
    InvalidPriceDecay = 32,
    /// Reserve and sale token must differ
    InvalidToken = 33,

    // ============================================
    // BID / CLAIM ERRORS (40-49)
    // ============================================
    /// Target already reached, no more bids accepted
    TargetExceeded = 40,
    /// Bidder cannot cover the accepted amount
    InsufficientFunds = 41,
    /// No unclaimed bid for this address
    NothingToClaim = 42,

    // ============================================
    // MATH ERRORS (50-59)
    // ============================================
    ArithmeticOverflow = 50,
}
