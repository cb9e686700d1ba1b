#![no_std]

mod error;
mod events;
mod pricing;
mod storage;


pub use error::Error;
pub use storage::{Auction, AuctionStatus, LinearDecay, PriceDecay};

use events::*;
use pricing::{
    calculate_clearing_price, calculate_price, calculate_tokens_owed, calculate_total_to_end,
    is_valid_decay, scale_for_decimals,
};
use storage::{DataKey, BID_TTL_EXTEND_TO, BID_TTL_THRESHOLD};

use soroban_sdk::{contract, contractimpl, token, Address, Env, Symbol};

#[contract]
pub struct DutchAuction;

#[contractimpl]
impl DutchAuction {
    // ============================================
    // CREATION & START
    // ============================================

    /// Bind the auction to a sale token and quantity
    ///
    /// `registry` becomes the controlling party and receives the proceeds.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidQuantity`: quantity is negative
    /// - `InvalidPriceDecay`: decay parameters rejected
    /// - `InvalidToken`: reserve and sale token are the same
    /// - `ArithmeticOverflow`: sale token decimals too large
    pub fn initialize(
        env: Env,
        registry: Address,
        reserve_token: Address,
        sale_token: Address,
        quantity: i128,
        decay: PriceDecay,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        registry.require_auth();

        if quantity < 0 {
            return Err(Error::InvalidQuantity);
        }

        if !is_valid_decay(&decay) {
            return Err(Error::InvalidPriceDecay);
        }

        if reserve_token == sale_token {
            return Err(Error::InvalidToken);
        }

        let decimals = token::Client::new(&env, &sale_token).decimals();
        let scale = scale_for_decimals(decimals).ok_or(Error::ArithmeticOverflow)?;

        let auction = Auction {
            registry,
            reserve_token,
            sale_token,
            quantity,
            scale,
            decay,
            status: AuctionStatus::Created,
            start_block: 0,
            end_block: 0,
            received_total: 0,
            bid_count: 0,
            final_price: 0,
            tokens_claimed: 0,
            bids_claimed: 0,
        };

        env.storage().instance().set(&DataKey::Initialized, &true);
        Self::save_auction(&env, &auction);

        Ok(())
    }

    /// Start the price clock at the current ledger sequence
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `AlreadyStarted`: start was already called
    /// - `InvalidQuantity`: nothing to sell
    /// - `AuctionNotFunded`: contract holds less than `quantity` sale tokens
    pub fn start(env: Env) -> Result<(), Error> {
        let mut auction = Self::load_auction(&env)?;
        auction.registry.require_auth();

        if auction.status != AuctionStatus::Created {
            return Err(Error::AlreadyStarted);
        }

        if auction.quantity <= 0 {
            return Err(Error::InvalidQuantity);
        }

        let funded = token::Client::new(&env, &auction.sale_token)
            .balance(&env.current_contract_address());
        if funded < auction.quantity {
            return Err(Error::AuctionNotFunded);
        }

        auction.status = AuctionStatus::Started;
        auction.start_block = env.ledger().sequence();
        Self::save_auction(&env, &auction);

        env.events().publish(
            (Symbol::new(&env, "auction_started"), auction.sale_token.clone()),
            AuctionStartedEvent {
                sale_token: auction.sale_token.clone(),
                quantity: auction.quantity,
                start_block: auction.start_block,
            },
        );

        Ok(())
    }

    // ============================================
    // ACCUMULATION PHASE
    // ============================================

    /// Bid reserve currency at the current price
    ///
    /// Only the part of `amount` still needed to reach the target is taken.
    /// Returns the accepted amount.
    ///
    /// # Errors
    /// - `InvalidAmount`: amount must be positive
    /// - `NotStarted`: auction not started
    /// - `AlreadyFinalized`: auction finalized or closed
    /// - `TargetExceeded`: target already reached
    /// - `InsufficientFunds`: bidder balance below the accepted amount
    pub fn bid(env: Env, bidder: Address, amount: i128) -> Result<i128, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        bidder.require_auth();

        let mut auction = Self::load_auction(&env)?;
        match auction.status {
            AuctionStatus::Created => return Err(Error::NotStarted),
            AuctionStatus::Finalized | AuctionStatus::Closed => {
                return Err(Error::AlreadyFinalized)
            }
            AuctionStatus::Started => {}
        }

        let current_block = env.ledger().sequence();
        let price = Self::price_for(&auction, current_block)?;
        let remaining = Self::remaining_for(&env, &auction, current_block)?;
        if remaining == 0 {
            return Err(Error::TargetExceeded);
        }

        let accepted = amount.min(remaining);

        let reserve = token::Client::new(&env, &auction.reserve_token);
        if reserve.balance(&bidder) < accepted {
            return Err(Error::InsufficientFunds);
        }

        let previous = Self::load_bid(&env, &bidder);
        let new_bid = previous
            .unwrap_or(0)
            .checked_add(accepted)
            .ok_or(Error::ArithmeticOverflow)?;
        let received_total = auction
            .received_total
            .checked_add(accepted)
            .ok_or(Error::ArithmeticOverflow)?;
        if previous.is_none() {
            auction.bid_count = auction
                .bid_count
                .checked_add(1)
                .ok_or(Error::ArithmeticOverflow)?;
        }

        reserve.transfer(&bidder, &env.current_contract_address(), &accepted);

        auction.received_total = received_total;
        Self::save_bid(&env, &bidder, new_bid);
        Self::save_auction(&env, &auction);

        env.events().publish(
            (Symbol::new(&env, "bid_placed"), bidder.clone()),
            BidPlacedEvent {
                bidder,
                offered: amount,
                accepted,
                price,
                received_total,
            },
        );

        Ok(accepted)
    }

    /// Lock the settlement price once the target is met
    ///
    /// Callable by anyone. Forwards the escrowed reserve currency to the
    /// registry and returns the final price.
    ///
    /// # Errors
    /// - `NotStarted`: auction not started
    /// - `AlreadyFinalized`: finalize already succeeded
    /// - `TargetNotReached`: received total below the current target
    pub fn finalize(env: Env) -> Result<i128, Error> {
        let mut auction = Self::load_auction(&env)?;
        match auction.status {
            AuctionStatus::Created => return Err(Error::NotStarted),
            AuctionStatus::Finalized | AuctionStatus::Closed => {
                return Err(Error::AlreadyFinalized)
            }
            AuctionStatus::Started => {}
        }

        let current_block = env.ledger().sequence();
        let price = Self::price_for(&auction, current_block)?;
        let total = calculate_total_to_end(&env, auction.quantity, price, auction.scale)
            .ok_or(Error::ArithmeticOverflow)?;
        if auction.received_total < total {
            return Err(Error::TargetNotReached);
        }

        // If the price kept falling after the target was met, settle at the
        // clearing price so claims never exceed the quantity.
        let clearing = calculate_clearing_price(
            &env,
            auction.received_total,
            auction.quantity,
            auction.scale,
        )
        .ok_or(Error::ArithmeticOverflow)?;
        let final_price = price.max(clearing);

        auction.final_price = final_price;
        auction.end_block = current_block;
        auction.status = AuctionStatus::Finalized;
        Self::save_auction(&env, &auction);

        if auction.received_total > 0 {
            token::Client::new(&env, &auction.reserve_token).transfer(
                &env.current_contract_address(),
                &auction.registry,
                &auction.received_total,
            );
        }

        env.events().publish(
            (Symbol::new(&env, "auction_finalized"), auction.sale_token.clone()),
            AuctionFinalizedEvent {
                final_price,
                received_total: auction.received_total,
                end_block: current_block,
            },
        );

        Ok(final_price)
    }

    // ============================================
    // DISTRIBUTION PHASE
    // ============================================

    /// Convert the caller's bid into sale tokens at the final price
    ///
    /// Returns the number of sale token units transferred (rounded down).
    ///
    /// # Errors
    /// - `NotFinalized`: auction not finalized
    /// - `AlreadyClosed`: auction closed
    /// - `NothingToClaim`: no bid, or bid already claimed
    pub fn claim(env: Env, bidder: Address) -> Result<i128, Error> {
        bidder.require_auth();

        let mut auction = Self::load_auction(&env)?;
        match auction.status {
            AuctionStatus::Created | AuctionStatus::Started => return Err(Error::NotFinalized),
            AuctionStatus::Closed => return Err(Error::AlreadyClosed),
            AuctionStatus::Finalized => {}
        }

        let bid = Self::load_bid(&env, &bidder).unwrap_or(0);
        if bid <= 0 {
            return Err(Error::NothingToClaim);
        }

        let owed = calculate_tokens_owed(&env, bid, auction.final_price, auction.scale)
            .ok_or(Error::ArithmeticOverflow)?;

        auction.tokens_claimed = auction
            .tokens_claimed
            .checked_add(owed)
            .ok_or(Error::ArithmeticOverflow)?;
        auction.bids_claimed = auction
            .bids_claimed
            .checked_add(bid)
            .ok_or(Error::ArithmeticOverflow)?;

        // Ledger first, payout second.
        env.storage().persistent().remove(&DataKey::Bid(bidder.clone()));
        Self::save_auction(&env, &auction);

        if owed > 0 {
            token::Client::new(&env, &auction.sale_token).transfer(
                &env.current_contract_address(),
                &bidder,
                &owed,
            );
        }

        env.events().publish(
            (Symbol::new(&env, "claimed"), bidder.clone()),
            ClaimedEvent {
                bidder,
                bid_amount: bid,
                tokens: owed,
            },
        );

        Ok(owed)
    }

    /// Close a fully claimed auction and sweep the rounding remainder
    ///
    /// # Errors
    /// - `NotFinalized`: auction not finalized
    /// - `AlreadyClosed`: auction already closed
    /// - `ClaimsOutstanding`: some bids are still unclaimed
    pub fn close(env: Env) -> Result<(), Error> {
        let mut auction = Self::load_auction(&env)?;
        auction.registry.require_auth();

        match auction.status {
            AuctionStatus::Created | AuctionStatus::Started => return Err(Error::NotFinalized),
            AuctionStatus::Closed => return Err(Error::AlreadyClosed),
            AuctionStatus::Finalized => {}
        }

        if auction.bids_claimed != auction.received_total {
            return Err(Error::ClaimsOutstanding);
        }

        auction.status = AuctionStatus::Closed;
        Self::save_auction(&env, &auction);

        let sale = token::Client::new(&env, &auction.sale_token);
        let swept = sale.balance(&env.current_contract_address());
        if swept > 0 {
            sale.transfer(&env.current_contract_address(), &auction.registry, &swept);
        }

        env.events().publish(
            (Symbol::new(&env, "auction_closed"), auction.sale_token.clone()),
            AuctionClosedEvent {
                tokens_claimed: auction.tokens_claimed,
                swept,
            },
        );

        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Price at the current ledger sequence
    pub fn price(env: Env) -> Result<i128, Error> {
        let auction = Self::load_auction(&env)?;
        Self::price_for(&auction, env.ledger().sequence())
    }

    /// Price at an arbitrary ledger sequence
    pub fn price_at(env: Env, sequence: u32) -> Result<i128, Error> {
        let auction = Self::load_auction(&env)?;
        Self::price_for(&auction, sequence)
    }

    /// Reserve amount that buys the whole quantity at the current price
    pub fn total_to_end_auction(env: Env) -> Result<i128, Error> {
        let auction = Self::load_auction(&env)?;
        let price = Self::price_for(&auction, env.ledger().sequence())?;
        calculate_total_to_end(&env, auction.quantity, price, auction.scale)
            .ok_or(Error::ArithmeticOverflow)
    }

    /// Reserve amount still needed to reach the target at the current price
    pub fn remaining_to_end_auction(env: Env) -> Result<i128, Error> {
        let auction = Self::load_auction(&env)?;
        Self::remaining_for(&env, &auction, env.ledger().sequence())
    }

    /// Unclaimed reserve amount recorded for a bidder
    pub fn bid_of(env: Env, bidder: Address) -> i128 {
        Self::load_bid(&env, &bidder).unwrap_or(0)
    }

    pub fn received_total(env: Env) -> Result<i128, Error> {
        Ok(Self::load_auction(&env)?.received_total)
    }

    pub fn bid_count(env: Env) -> Result<u32, Error> {
        Ok(Self::load_auction(&env)?.bid_count)
    }

    pub fn start_block(env: Env) -> Result<u32, Error> {
        Ok(Self::load_auction(&env)?.start_block)
    }

    pub fn quantity(env: Env) -> Result<i128, Error> {
        Ok(Self::load_auction(&env)?.quantity)
    }

    pub fn final_price(env: Env) -> Result<i128, Error> {
        Ok(Self::load_auction(&env)?.final_price)
    }

    pub fn tokens_claimed(env: Env) -> Result<i128, Error> {
        Ok(Self::load_auction(&env)?.tokens_claimed)
    }

    pub fn is_started(env: Env) -> Result<bool, Error> {
        Ok(Self::load_auction(&env)?.status != AuctionStatus::Created)
    }

    pub fn is_finalized(env: Env) -> Result<bool, Error> {
        Ok(matches!(
            Self::load_auction(&env)?.status,
            AuctionStatus::Finalized | AuctionStatus::Closed
        ))
    }

    pub fn status(env: Env) -> Result<AuctionStatus, Error> {
        Ok(Self::load_auction(&env)?.status)
    }

    /// Get the full auction record
    pub fn get_auction(env: Env) -> Result<Auction, Error> {
        Self::load_auction(&env)
    }
}

// ============================================
// INTERNAL HELPERS
// ============================================

impl DutchAuction {
    fn load_auction(env: &Env) -> Result<Auction, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Auction)
            .ok_or(Error::NotInitialized)
    }

    fn save_auction(env: &Env, auction: &Auction) {
        env.storage().instance().set(&DataKey::Auction, auction);
    }

    fn load_bid(env: &Env, bidder: &Address) -> Option<i128> {
        env.storage()
            .persistent()
            .get(&DataKey::Bid(bidder.clone()))
    }

    fn save_bid(env: &Env, bidder: &Address, amount: i128) {
        let key = DataKey::Bid(bidder.clone());
        env.storage().persistent().set(&key, &amount);
        env.storage()
            .persistent()
            .extend_ttl(&key, BID_TTL_THRESHOLD, BID_TTL_EXTEND_TO);
    }

    fn price_for(auction: &Auction, sequence: u32) -> Result<i128, Error> {
        if auction.status == AuctionStatus::Created {
            return Err(Error::NotStarted);
        }

        let elapsed = sequence.saturating_sub(auction.start_block);
        calculate_price(&auction.decay, auction.scale, elapsed).ok_or(Error::ArithmeticOverflow)
    }

    fn remaining_for(env: &Env, auction: &Auction, sequence: u32) -> Result<i128, Error> {
        let price = Self::price_for(auction, sequence)?;
        let total = calculate_total_to_end(env, auction.quantity, price, auction.scale)
            .ok_or(Error::ArithmeticOverflow)?;
        Ok(total.saturating_sub(auction.received_total).max(0))
    }
}
