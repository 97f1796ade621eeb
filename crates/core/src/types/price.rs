//! Decimal price arithmetic.
//!
//! Catalog prices carry a unit price and a percentage discount. The only
//! derived figure is the discounted display price; the stored price and
//! discount values are never mutated by display rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Compute the discounted price for display.
///
/// `price - price * discount_percent / 100`, rounded to the nearest whole
/// currency unit (midpoints round away from zero). Display only - callers
/// must keep the underlying price and discount untouched.
///
/// # Example
///
/// ```rust
/// use petalcart_core::discounted_price;
/// use rust_decimal::Decimal;
///
/// let display = discounted_price(Decimal::from(500), Decimal::from(20));
/// assert_eq!(display, Decimal::from(400));
/// ```
#[must_use]
pub fn discounted_price(price: Decimal, discount_percent: Decimal) -> Decimal {
    let discounted = price - price * discount_percent / Decimal::ONE_HUNDRED;
    discounted.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
