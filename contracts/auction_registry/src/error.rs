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
    // AUCTION ERRORS (20-29)
    // ============================================
    /// Sale token already has a live auction
    AuctionExists = 20,
    /// No auction recorded for this sale token
    AuctionNotFound = 21,

    // ============================================
    // PARAMETER ERRORS (30-39)
    // ============================================
    /// Quantity must be positive
    InvalidQuantity = 30,
    /// Start price or decay parameters rejected
    InvalidPriceDecay = 31,
    /// Registry does not hold `quantity` sale tokens
    InsufficientBalance = 32,
    /// Sale token and reserve token must differ
    InvalidToken = 33,

    // ============================================
    // MATH ERRORS (50-59)
    // ============================================
    /// Counter overflow
    ArithmeticOverflow = 50,
}
