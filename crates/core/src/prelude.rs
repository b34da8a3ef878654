//! WAVE prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    accounts::{Registration, Role, UnknownRole, normalize_email},
    cart::{Cart, CartAction, CartError, CartLine},
    catalog::{CatalogError, ProductStatus, ProductSubmission, ReviewDecision},
    checkout::{
        CheckoutError, OrderDraft, PricedLine, SALE_NOTICE_TITLE, ShippingAddress, VendorNotice,
        plan_vendor_notices,
    },
    fixtures::{CatalogFixture, FixtureError, ProductFixture, VendorFixture},
    money::{MoneyError, STORE_CURRENCY, format_price, line_total, sum_amounts},
    orders::{OrderStatus, OrderStatusError},
    validation::{FieldError, ValidationErrors},
};
