use crate::storage::{LinearDecay, PriceDecay};
use soroban_sdk::{Env, I256};

/// Check that a decay policy yields a positive, non-increasing price
pub fn is_valid_decay(decay: &PriceDecay) -> bool {
    match decay {
        PriceDecay::Reciprocal(start_price) => *start_price > 0,
        PriceDecay::ClampedLinear(LinearDecay {
            ceiling,
            step,
            floor,
        }) => *floor > 0 && *ceiling >= *floor && *step >= 0,
    }
}

/// Calculate the price after `elapsed` blocks
///
/// Reciprocal: price(n) = start_price × scale / (n + 1)
///
/// Example (start_price 100, scale 1e7):
/// - n = 0: 1_000_000_000
/// - n = 1: 500_000_000
/// - n = 10: 90_909_090
///
/// Clamped linear: price(n) = max(ceiling - step × n, floor)
///
/// The result never drops below 1.
pub fn calculate_price(decay: &PriceDecay, scale: i128, elapsed: u32) -> Option<i128> {
    let price = match decay {
        PriceDecay::Reciprocal(start_price) => start_price
            .checked_mul(scale)?
            .checked_div(elapsed as i128 + 1)?,
        PriceDecay::ClampedLinear(LinearDecay {
            ceiling,
            step,
            floor,
        }) => step
            .checked_mul(elapsed as i128)
            .and_then(|drop| ceiling.checked_sub(drop))
            .map_or(*floor, |price| price.max(*floor)),
    };

    Some(price.max(1))
}

/// Reserve amount that buys the whole quantity at `price`
///
/// Formula: total = quantity × price / scale
///
/// Example:
/// - quantity: 3 tokens (30_000_000), price: 100 (1_000_000_000), scale: 1e7
/// - total: 3_000_000_000 (300 reserve tokens)
pub fn calculate_total_to_end(
    env: &Env,
    quantity: i128,
    price: i128,
    scale: i128,
) -> Option<i128> {
    mul_div_floor(env, quantity, price, scale)
}

/// Sale token units owed for a bid at the final price (floor)
///
/// Formula: owed = bid × scale / final_price
pub fn calculate_tokens_owed(
    env: &Env,
    bid: i128,
    final_price: i128,
    scale: i128,
) -> Option<i128> {
    mul_div_floor(env, bid, scale, final_price)
}

/// Lowest price at which `received` buys no more than `quantity` (ceil)
///
/// Formula: clearing = ceil(received × scale / quantity)
pub fn calculate_clearing_price(
    env: &Env,
    received: i128,
    quantity: i128,
    scale: i128,
) -> Option<i128> {
    if quantity <= 0 {
        return None;
    }

    let numerator = I256::from_i128(env, received).mul(&I256::from_i128(env, scale));
    let divisor = I256::from_i128(env, quantity);
    let price = numerator.div(&divisor).to_i128()?;
    // remainder is below `quantity`, so it always fits
    if numerator.rem_euclid(&divisor).to_i128()? > 0 {
        price.checked_add(1)
    } else {
        Some(price)
    }
}

/// `a × b / divisor` rounded down, with a 256-bit intermediate product.
///
/// Only a result that does not fit in i128 is reported as overflow.
fn mul_div_floor(env: &Env, a: i128, b: i128, divisor: i128) -> Option<i128> {
    if divisor <= 0 {
        return None;
    }

    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, divisor))
        .to_i128()
}

/// Sale token scale from its decimals
pub fn scale_for_decimals(decimals: u32) -> Option<i128> {
    10i128.checked_pow(decimals)
}
