//! Money
//!
//! All amounts are held as `u64` minor units (kobo) of the store currency and
//! only converted into [`Money`] for display.

use rusty_money::{
    Money,
    iso::{Currency, NGN},
};
use thiserror::Error;

/// The currency every price, line and order total is expressed in.
pub const STORE_CURRENCY: &Currency = NGN;

/// Largest amount the store can hold; amount columns are `BIGINT`.
pub const MAX_AMOUNT: u64 = i64::MAX.unsigned_abs();

/// Errors raised by amount arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The result does not fit into the amount type.
    #[error("amount overflow")]
    Overflow,
}

/// Wrap a minor-unit amount as store-currency [`Money`].
///
/// Amounts beyond [`MAX_AMOUNT`] are clamped, which only affects display.
pub fn store_money(minor: u64) -> Money<'static, Currency> {
    Money::from_minor(i64::try_from(minor).unwrap_or(i64::MAX), STORE_CURRENCY)
}

/// Render a minor-unit amount for people, e.g. `₦2,500.00`.
pub fn format_price(minor: u64) -> String {
    store_money(minor).to_string()
}

/// Price of `quantity` units at `unit_price`.
///
/// # Errors
///
/// Returns [`MoneyError::Overflow`] if the product exceeds [`MAX_AMOUNT`].
pub fn line_total(unit_price: u64, quantity: u32) -> Result<u64, MoneyError> {
    unit_price
        .checked_mul(u64::from(quantity))
        .filter(|total| *total <= MAX_AMOUNT)
        .ok_or(MoneyError::Overflow)
}

/// Sum a sequence of amounts.
///
/// # Errors
///
/// Returns [`MoneyError::Overflow`] if the sum exceeds [`MAX_AMOUNT`].
pub fn sum_amounts(amounts: impl IntoIterator<Item = u64>) -> Result<u64, MoneyError> {
    amounts
        .into_iter()
        .try_fold(0_u64, |total, amount| {
            total
                .checked_add(amount)
                .filter(|total| *total <= MAX_AMOUNT)
        })
        .ok_or(MoneyError::Overflow)
}
