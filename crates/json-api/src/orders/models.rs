//! Order Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wave::{
    checkout::ShippingAddress,
    money::{MoneyError, format_price},
};
use wave_app::domain::orders::records::{OrderItemRecord, OrderRecord};

/// Delivery details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShippingAddressBody {
    /// Recipient name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// Country
    pub country: String,
}

impl From<ShippingAddressBody> for ShippingAddress {
    fn from(body: ShippingAddressBody) -> Self {
        ShippingAddress {
            name: body.name,
            email: body.email,
            address: body.address,
            city: body.city,
            country: body.country,
        }
    }
}

impl From<ShippingAddress> for ShippingAddressBody {
    fn from(address: ShippingAddress) -> Self {
        ShippingAddressBody {
            name: address.name,
            email: address.email,
            address: address.address,
            city: address.city,
            country: address.country,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    /// Product bought
    pub product_uuid: Uuid,

    /// Vendor that sold it
    pub vendor_uuid: Option<Uuid>,

    /// Product name at checkout
    pub name: String,

    /// Unit price paid, in kobo
    pub unit_price: u64,

    /// Unit price formatted in naira
    pub unit_price_display: String,

    /// Units bought
    pub quantity: u32,

    /// `unit_price × quantity`, in kobo
    pub line_total: u64,

    /// Line total formatted in naira
    pub line_total_display: String,
}

impl TryFrom<OrderItemRecord> for OrderItemResponse {
    type Error = MoneyError;

    fn try_from(item: OrderItemRecord) -> Result<Self, Self::Error> {
        let line_total = item.line_total()?;

        Ok(Self {
            product_uuid: item.product_uuid.into(),
            vendor_uuid: item.vendor_uuid.map(Into::into),
            name: item.name,
            unit_price: item.unit_price,
            unit_price_display: format_price(item.unit_price),
            quantity: item.quantity,
            line_total,
            line_total_display: format_price(line_total),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// The customer who placed it
    pub customer_uuid: Uuid,

    /// pending, shipped or delivered
    pub status: String,

    /// Order total in kobo
    pub total: u64,

    /// Order total formatted in naira
    pub total_display: String,

    /// Where the order is going
    pub shipping: ShippingAddressBody,

    /// Lines in cart order
    pub items: Vec<OrderItemResponse>,

    /// The date and time the order was placed
    pub created_at: String,

    /// The date and time the order last changed status
    pub updated_at: String,
}

impl TryFrom<OrderRecord> for OrderResponse {
    type Error = MoneyError;

    fn try_from(order: OrderRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: order.uuid.into(),
            customer_uuid: order.customer_uuid.into(),
            status: order.status.to_string(),
            total: order.total,
            total_display: format_price(order.total),
            shipping: order.shipping.into(),
            items: order
                .items
                .into_iter()
                .map(OrderItemResponse::try_from)
                .collect::<Result<_, _>>()?,
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// The list of orders
    pub orders: Vec<OrderResponse>,
}

impl TryFrom<Vec<OrderRecord>> for OrdersResponse {
    type Error = MoneyError;

    fn try_from(orders: Vec<OrderRecord>) -> Result<Self, Self::Error> {
        Ok(Self {
            orders: orders
                .into_iter()
                .map(OrderResponse::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}
