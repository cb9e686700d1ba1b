use crate::error::Error;
use crate::storage::{LinearDecay, PriceDecay};
use soroban_sdk::Address;

/// Check auction parameters before anything is funded
///
/// Rules:
/// - sale token differs from the reserve token
/// - quantity > 0
/// - reciprocal start price > 0
/// - linear: floor > 0, ceiling >= floor, step >= 0
pub fn validate_auction_params(
    reserve_token: &Address,
    sale_token: &Address,
    quantity: i128,
    decay: &PriceDecay,
) -> Result<(), Error> {
    if sale_token == reserve_token {
        return Err(Error::InvalidToken);
    }

    if quantity <= 0 {
        return Err(Error::InvalidQuantity);
    }

    let valid = match decay {
        PriceDecay::Reciprocal(start_price) => *start_price > 0,
        PriceDecay::ClampedLinear(LinearDecay {
            ceiling,
            step,
            floor,
        }) => *floor > 0 && *ceiling >= *floor && *step >= 0,
    };

    if !valid {
        return Err(Error::InvalidPriceDecay);
    }

    Ok(())
}
