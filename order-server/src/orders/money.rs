//! Money calculation utilities using rust_decimal for precision
//!
//! Calculations are done using `Decimal` internally, then converted to `f64`
//! for serialization.

use rust_decimal::prelude::*;

/// Value of an order from its line-item unit prices and voucher discount.
///
/// `total` is the plain sum of unit prices: quantity is not multiplied in.
/// The discount is backed out of the total rather than applied to it:
/// `value = total * 100 / (100 + discount)`.
///
/// NOTE: ignoring quantity matches the figures already shown for historical
/// orders. Whether it should count is still an open product question.
pub fn order_value(unit_prices: impl IntoIterator<Item = f64>, discount_percentage: i32) -> f64 {
    let total: Decimal = unit_prices.into_iter().map(to_decimal).sum();

    let divisor = Decimal::from(100 + discount_percentage);
    if divisor <= Decimal::ZERO {
        return total.to_f64().unwrap_or_default();
    }

    (total * Decimal::ONE_HUNDRED / divisor)
        .to_f64()
        .unwrap_or_default()
}

#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}
