//! # Discount Engine
//!
//! Computes a discounted sale price, gated by the product's `allow_discount` flag.
//! All arithmetic is decimal; results are rounded to cents.
//!
//! Applying a discount is not idempotent: each call discounts the *current* price again,
//! so two 10% discounts yield `price * 0.9 * 0.9`, not `price * 0.8`.

use crate::error::StoreError;
use rust_decimal::{Decimal, RoundingStrategy};

/// Minor-unit precision of prices (cents).
pub const PRICE_SCALE: u32 = 2;

/// Anything with a sale price and a discount gate.
pub trait Discountable {
    fn allow_discount(&self) -> bool;
    fn set_allow_discount(&mut self, allow: bool);
    fn sale_price(&self) -> Decimal;
    fn set_sale_price(&mut self, price: Decimal);
}

/// Rounds a price to [`PRICE_SCALE`] places, halves away from zero.
pub fn round_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// `price * (1 - percent / 100)`, rounded to cents.
///
/// `percent` must lie strictly between 0 and 100. A price that would round down to zero, or
/// one too large to scale without overflow, is rejected with [`StoreError::InvalidPrice`].
pub fn discounted_price(price: Decimal, percent: Decimal) -> Result<Decimal, StoreError> {
    if percent <= Decimal::ZERO || percent >= Decimal::ONE_HUNDRED {
        return Err(StoreError::InvalidPercent(percent));
    }
    let discounted = price
        .checked_mul(Decimal::ONE_HUNDRED - percent)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .map(round_price)
        .ok_or(StoreError::InvalidPrice(price))?;
    if discounted <= Decimal::ZERO {
        return Err(StoreError::InvalidPrice(discounted));
    }
    Ok(discounted)
}

/// Discounts the current sale price of `current`.
pub fn apply<E: Discountable>(mut current: E, percent: Decimal) -> Result<E, StoreError> {
    if !current.allow_discount() {
        return Err(StoreError::DiscountNotAllowed);
    }
    let price = discounted_price(current.sale_price(), percent)?;
    current.set_sale_price(price);
    Ok(current)
}

pub fn enable<E: Discountable>(mut current: E) -> E {
    current.set_allow_discount(true);
    current
}

pub fn disable<E: Discountable>(mut current: E) -> E {
    current.set_allow_discount(false);
    current
}
