//! Cart Records

use wave::money::{MoneyError, line_total, sum_amounts};

use crate::domain::{accounts::records::AccountUuid, products::records::ProductUuid};

/// Cart Record
#[derive(Debug, Clone)]
pub struct CartRecord {
    pub account_uuid: AccountUuid,
    pub lines: Vec<CartLineRecord>,
    /// Sum of the available lines only.
    pub subtotal: u64,
    /// Units across every line.
    pub item_count: u64,
}

impl CartRecord {
    /// Total up `lines` for `account`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if a line or the subtotal overflows.
    pub fn from_lines(
        account_uuid: AccountUuid,
        lines: Vec<CartLineRecord>,
    ) -> Result<Self, MoneyError> {
        let subtotal = sum_amounts(
            lines
                .iter()
                .filter(|line| line.available)
                .map(CartLineRecord::line_total)
                .collect::<Result<Vec<_>, _>>()?,
        )?;

        let item_count = lines.iter().map(|line| u64::from(line.quantity)).sum();

        Ok(Self {
            account_uuid,
            lines,
            subtotal,
            item_count,
        })
    }

    /// An account with no cart yet.
    #[must_use]
    pub fn empty(account_uuid: AccountUuid) -> Self {
        Self {
            account_uuid,
            lines: Vec::new(),
            subtotal: 0,
            item_count: 0,
        }
    }
}

/// Cart line joined with the product's current data.
#[derive(Debug, Clone)]
pub struct CartLineRecord {
    pub product_uuid: ProductUuid,
    pub vendor_uuid: AccountUuid,
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub unit_price: u64,
    pub quantity: u32,
    /// Whether the product is still approved and listed.
    pub available: bool,
}

impl CartLineRecord {
    /// `unit_price × quantity`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the total does not fit.
    pub fn line_total(&self) -> Result<u64, MoneyError> {
        line_total(self.unit_price, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn line(unit_price: u64, quantity: u32, available: bool) -> CartLineRecord {
        CartLineRecord {
            product_uuid: ProductUuid::new(),
            vendor_uuid: AccountUuid::new(),
            name: "Ofada Rice".to_string(),
            category: "Food".to_string(),
            image_url: "https://images.example.com/rice.png".to_string(),
            unit_price,
            quantity,
            available,
        }
    }

    #[test]
    fn subtotal_skips_unavailable_lines() -> TestResult {
        let cart = CartRecord::from_lines(
            AccountUuid::new(),
            vec![line(1_000_00, 2, true), line(5_000_00, 1, false)],
        )?;

        assert_eq!(cart.subtotal, 2_000_00);
        assert_eq!(cart.item_count, 3);

        Ok(())
    }

    #[test]
    fn overflowing_line_is_reported() {
        let result = CartRecord::from_lines(AccountUuid::new(), vec![line(u64::MAX, 2, true)]);

        assert!(matches!(result, Err(MoneyError::Overflow)));
    }
}
