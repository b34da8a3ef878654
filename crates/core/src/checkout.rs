//! Checkout
//!
//! Turns priced cart lines into an order draft and plans the per-vendor
//! sale notices written alongside the order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    money::{MoneyError, format_price, line_total, sum_amounts},
    validation::ValidationErrors,
};

/// Title of every vendor sale notice.
pub const SALE_NOTICE_TITLE: &str = "New Sale!";

/// Errors raised while planning a checkout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// There is nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// An amount overflowed.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Delivery details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// Recipient name, also used as the customer name in vendor notices.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Street address.
    pub address: String,

    /// City.
    pub city: String,

    /// Country.
    pub country: String,
}

impl ShippingAddress {
    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns every rejected field at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        errors.min_chars("name", &self.name, 2);
        errors.email("email", &self.email);
        errors.min_chars("address", &self.address, 10);
        errors.min_chars("city", &self.city, 2);
        errors.min_chars("country", &self.country, 2);

        errors.into_result()
    }
}

/// A cart line resolved against current product data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedLine {
    /// Product being bought.
    pub product: Uuid,

    /// Selling vendor, if the product has one.
    pub vendor: Option<Uuid>,

    /// Product name at checkout time.
    pub name: String,

    /// Unit price in minor units at checkout time.
    pub unit_price: u64,

    /// Units bought.
    pub quantity: u32,
}

impl PricedLine {
    /// `unit_price × quantity`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the total does not fit.
    pub fn total(&self) -> Result<u64, MoneyError> {
        line_total(self.unit_price, self.quantity)
    }
}

/// A validated, totalled order ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    lines: Vec<PricedLine>,
    total: u64,
}

impl OrderDraft {
    /// Build a draft from priced lines.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] for no lines and
    /// [`CheckoutError::Money`] if the total overflows.
    pub fn new(lines: Vec<PricedLine>) -> Result<Self, CheckoutError> {
        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let totals = lines
            .iter()
            .map(PricedLine::total)
            .collect::<Result<Vec<_>, _>>()?;

        let total = sum_amounts(totals)?;

        Ok(Self { lines, total })
    }

    /// Lines in cart order.
    pub fn lines(&self) -> &[PricedLine] {
        &self.lines
    }

    /// Order total in minor units.
    pub fn total(&self) -> u64 {
        self.total
    }
}

/// A sale notice addressed to one vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorNotice {
    /// Receiving vendor.
    pub vendor: Uuid,

    /// Notice title.
    pub title: String,

    /// Notice body.
    pub message: String,

    /// Number of order lines sold by this vendor.
    pub line_count: usize,

    /// Value of those lines in minor units.
    pub total: u64,
}

/// Plan one notice per vendor represented in `lines`.
///
/// Vendors appear in the order their first line does. Lines without a vendor
/// are left out. The count in each message is the number of lines, not units.
///
/// # Errors
///
/// Returns [`MoneyError::Overflow`] if a vendor total overflows.
pub fn plan_vendor_notices(
    customer_name: &str,
    lines: &[PricedLine],
) -> Result<Vec<VendorNotice>, MoneyError> {
    let mut index: FxHashMap<Uuid, usize> = FxHashMap::default();
    let mut groups: Vec<(Uuid, usize, u64)> = Vec::new();

    for line in lines {
        let Some(vendor) = line.vendor else {
            continue;
        };

        let amount = line.total()?;

        let slot = *index.entry(vendor).or_insert_with(|| {
            groups.push((vendor, 0, 0));
            groups.len() - 1
        });

        if let Some((_, count, total)) = groups.get_mut(slot) {
            *count += 1;
            *total = sum_amounts([*total, amount])?;
        }
    }

    Ok(groups
        .into_iter()
        .map(|(vendor, line_count, total)| VendorNotice {
            vendor,
            title: SALE_NOTICE_TITLE.to_string(),
            message: format!(
                "You sold {line_count} product(s) to {customer_name} for a total of {}.",
                format_price(total)
            ),
            line_count,
            total,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn line(product: u128, vendor: Option<u128>, unit_price: u64, quantity: u32) -> PricedLine {
        PricedLine {
            product: Uuid::from_u128(product),
            vendor: vendor.map(Uuid::from_u128),
            name: format!("Product {product}"),
            unit_price,
            quantity,
        }
    }

    #[test]
    fn draft_totals_lines() -> TestResult {
        let draft = OrderDraft::new(vec![
            line(1, Some(10), 2_500_00, 2),
            line(2, None, 1_000_00, 1),
        ])?;

        assert_eq!(draft.total(), 6_000_00);
        assert_eq!(draft.lines().len(), 2);

        Ok(())
    }

    #[test]
    fn empty_draft_is_rejected() {
        assert_eq!(OrderDraft::new(Vec::new()), Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn overflowing_draft_is_rejected() {
        assert_eq!(
            OrderDraft::new(vec![line(1, None, u64::MAX, 2)]),
            Err(CheckoutError::Money(MoneyError::Overflow))
        );
    }

    #[test]
    fn notices_count_lines_not_units() -> TestResult {
        let notices = plan_vendor_notices("Ada", &[line(1, Some(10), 1_000_00, 5)])?;

        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].line_count, 1);
        assert_eq!(
            notices[0].message,
            "You sold 1 product(s) to Ada for a total of ₦5,000.00."
        );
        assert_eq!(notices[0].title, SALE_NOTICE_TITLE);

        Ok(())
    }

    #[test]
    fn shipping_address_rejects_short_fields() {
        let address = ShippingAddress {
            name: "A".to_string(),
            email: "ada@example.com".to_string(),
            address: "1 Road".to_string(),
            city: "Lagos".to_string(),
            country: "N".to_string(),
        };

        let errors = address.validate().err().unwrap_or_default();

        assert!(errors.has("name"), "name should be rejected");
        assert!(errors.has("address"), "address should be rejected");
        assert!(errors.has("country"), "country should be rejected");
        assert!(!errors.has("city"), "city should be accepted");
        assert!(!errors.has("email"), "email should be accepted");
    }
}
