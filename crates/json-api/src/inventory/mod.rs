//! Inventory
//!
//! A vendor's own products in every status. Submissions and edits go back to
//! `pending` until an admin reviews them.

mod handlers;
pub(crate) mod requests;

pub(crate) use handlers::*;
