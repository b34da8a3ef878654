//! Orders Data

use wave::checkout::ShippingAddress;

use crate::domain::orders::records::OrderUuid;

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub shipping: ShippingAddress,
}
