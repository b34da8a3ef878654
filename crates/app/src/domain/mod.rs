//! Storefront Domain Concerns

pub mod accounts;
pub mod analytics;
pub mod carts;
pub mod categories;
pub(crate) mod columns;
pub mod notifications;
pub mod orders;
pub mod products;
