//! Order Records

use jiff::Timestamp;
use wave::{
    checkout::ShippingAddress,
    money::{MoneyError, line_total},
    orders::OrderStatus,
};

use crate::{
    domain::{
        accounts::records::AccountUuid, notifications::records::NotificationRecord,
        products::records::ProductUuid,
    },
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub customer_uuid: AccountUuid,
    pub status: OrderStatus,
    pub total: u64,
    pub shipping: ShippingAddress,
    pub items: Vec<OrderItemRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order line with the price paid at checkout.
#[derive(Debug, Clone)]
pub struct OrderItemRecord {
    pub product_uuid: ProductUuid,
    pub vendor_uuid: Option<AccountUuid>,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
}

impl OrderItemRecord {
    /// `unit_price × quantity`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the total does not fit.
    pub fn line_total(&self) -> Result<u64, MoneyError> {
        line_total(self.unit_price, self.quantity)
    }
}

/// A placed order and the vendor notifications written with it.
#[derive(Debug, Clone)]
pub struct Checkout {
    pub order: OrderRecord,
    pub notifications: Vec<NotificationRecord>,
}
