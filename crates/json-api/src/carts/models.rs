//! Cart Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wave::money::{MoneyError, format_price};
use wave_app::domain::carts::records::{CartLineRecord, CartRecord};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// Product in the line
    pub product_uuid: Uuid,

    /// Vendor selling the product
    pub vendor_uuid: Uuid,

    /// Current product name
    pub name: String,

    /// Category name
    pub category: String,

    /// Absolute image URL
    pub image_url: String,

    /// Current unit price, in kobo
    pub unit_price: u64,

    /// Unit price formatted in naira
    pub unit_price_display: String,

    /// Units in the cart
    pub quantity: u32,

    /// `unit_price × quantity`, in kobo
    pub line_total: u64,

    /// Line total formatted in naira
    pub line_total_display: String,

    /// False once the product has been withdrawn or sent back for review
    pub available: bool,
}

impl TryFrom<CartLineRecord> for CartLineResponse {
    type Error = MoneyError;

    fn try_from(line: CartLineRecord) -> Result<Self, Self::Error> {
        let line_total = line.line_total()?;

        Ok(CartLineResponse {
            product_uuid: line.product_uuid.into(),
            vendor_uuid: line.vendor_uuid.into(),
            name: line.name,
            category: line.category,
            image_url: line.image_url,
            unit_price: line.unit_price,
            unit_price_display: format_price(line.unit_price),
            quantity: line.quantity,
            line_total,
            line_total_display: format_price(line_total),
            available: line.available,
        })
    }
}

/// The caller's cart
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Lines in the order they were first added
    pub lines: Vec<CartLineResponse>,

    /// Sum of the available lines, in kobo
    pub subtotal: u64,

    /// Subtotal formatted in naira
    pub subtotal_display: String,

    /// Units across every line
    pub item_count: u64,
}

impl TryFrom<CartRecord> for CartResponse {
    type Error = MoneyError;

    fn try_from(cart: CartRecord) -> Result<Self, Self::Error> {
        Ok(CartResponse {
            lines: cart
                .lines
                .into_iter()
                .map(CartLineResponse::try_from)
                .collect::<Result<_, _>>()?,
            subtotal: cart.subtotal,
            subtotal_display: format_price(cart.subtotal),
            item_count: cart.item_count,
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use wave_app::domain::{
        accounts::records::AccountUuid,
        carts::records::{CartLineRecord, CartRecord},
        products::records::ProductUuid,
    };

    pub(crate) fn make_line(product: ProductUuid, quantity: u32, available: bool) -> CartLineRecord {
        CartLineRecord {
            product_uuid: product,
            vendor_uuid: AccountUuid::new(),
            name: "Ankara Tote Bag".to_string(),
            category: "Fashion".to_string(),
            image_url: "https://images.example.com/tote.png".to_string(),
            unit_price: 2_500_00,
            quantity,
            available,
        }
    }

    pub(crate) fn make_cart(account: AccountUuid, lines: Vec<CartLineRecord>) -> CartRecord {
        CartRecord::from_lines(account, lines).unwrap_or_else(|_| CartRecord::empty(account))
    }
}
