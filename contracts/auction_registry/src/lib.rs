#![no_std]

mod error;
mod events;
mod storage;
mod validation;


pub use error::Error;
pub use storage::{AuctionRecord, LinearDecay, PriceDecay};

use events::*;
use storage::DataKey;
use validation::validate_auction_params;

use soroban_sdk::{contract, contractimpl, token, vec, Address, Env, IntoVal, Symbol};

#[contract]
pub struct AuctionRegistry;

#[contractimpl]
impl AuctionRegistry {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Initialize the registry
    ///
    /// `reserve_token` is the currency every auction settles in.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, admin: Address, reserve_token: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::ReserveToken, &reserve_token);
        env.storage().instance().set(&DataKey::AuctionCount, &0u32);

        Ok(())
    }

    // ============================================
    // AUCTION CREATION
    // ============================================

    /// Bind, fund and start an auction for `sale_token`
    ///
    /// The registry must already hold `quantity` sale tokens. The auction
    /// settles in the registry's reserve token and pays its proceeds here.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidToken`: sale token is the reserve token
    /// - `InvalidQuantity`: quantity must be positive
    /// - `InvalidPriceDecay`: start price or decay parameters rejected
    /// - `AuctionExists`: sale token already has a live auction
    /// - `InsufficientBalance`: registry holds less than `quantity`
    /// - `ArithmeticOverflow`: auction counter exhausted
    pub fn start_token_auction(
        env: Env,
        auction: Address,
        sale_token: Address,
        quantity: i128,
        decay: PriceDecay,
    ) -> Result<Address, Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();

        let reserve_token: Address = env
            .storage()
            .instance()
            .get(&DataKey::ReserveToken)
            .ok_or(Error::NotInitialized)?;

        validate_auction_params(&reserve_token, &sale_token, quantity, &decay)?;

        let record_key = DataKey::Auction(sale_token.clone());
        if env.storage().instance().has(&record_key) {
            return Err(Error::AuctionExists);
        }

        let sale_client = token::Client::new(&env, &sale_token);
        if sale_client.balance(&env.current_contract_address()) < quantity {
            return Err(Error::InsufficientBalance);
        }

        env.invoke_contract::<()>(
            &auction,
            &Symbol::new(&env, "initialize"),
            vec![
                &env,
                env.current_contract_address().to_val(),
                reserve_token.to_val(),
                sale_token.to_val(),
                quantity.into_val(&env),
                decay.into_val(&env)
            ],
        );

        sale_client.transfer(&env.current_contract_address(), &auction, &quantity);

        env.invoke_contract::<()>(&auction, &Symbol::new(&env, "start"), vec![&env]);

        let created_block = env.ledger().sequence();
        let record = AuctionRecord {
            auction: auction.clone(),
            sale_token: sale_token.clone(),
            quantity,
            created_block,
        };
        env.storage().instance().set(&record_key, &record);

        let count = env
            .storage()
            .instance()
            .get::<DataKey, u32>(&DataKey::AuctionCount)
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;
        env.storage().instance().set(&DataKey::AuctionCount, &count);

        env.events().publish(
            (Symbol::new(&env, "auction_created"), sale_token.clone()),
            AuctionCreatedEvent {
                auction: auction.clone(),
                sale_token,
                quantity,
                start_block: created_block,
            },
        );

        Ok(auction)
    }

    // ============================================
    // AUCTION RETIREMENT
    // ============================================

    /// Close the auction for `sale_token` once every bid is claimed
    ///
    /// The auction sweeps its rounding remainder back to the registry. The
    /// record is dropped so the token can be auctioned again.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `AuctionNotFound`: no auction recorded for this token
    pub fn close_token_auction(env: Env, sale_token: Address) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();

        let record_key = DataKey::Auction(sale_token.clone());
        let record: AuctionRecord = env
            .storage()
            .instance()
            .get(&record_key)
            .ok_or(Error::AuctionNotFound)?;

        env.invoke_contract::<()>(&record.auction, &Symbol::new(&env, "close"), vec![&env]);

        env.storage().instance().remove(&record_key);

        env.events().publish(
            (Symbol::new(&env, "auction_retired"), sale_token.clone()),
            AuctionRetiredEvent {
                auction: record.auction,
                sale_token,
            },
        );

        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Get the live auction for a sale token
    pub fn get_auction(env: Env, sale_token: Address) -> Result<AuctionRecord, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Auction(sale_token))
            .ok_or(Error::AuctionNotFound)
    }

    /// Number of auctions ever started through this registry
    pub fn auction_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::AuctionCount)
            .unwrap_or(0)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    pub fn get_reserve_token(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::ReserveToken)
            .ok_or(Error::NotInitialized)
    }
}
