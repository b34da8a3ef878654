//! WAVE
//!
//! Storefront domain rules for the WAVE marketplace: prices in naira minor
//! units, the cart reducer, product approval, checkout planning with its
//! per-vendor sale notices, order fulfilment and account roles.

pub mod accounts;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod money;
pub mod orders;
pub mod prelude;
pub mod validation;
