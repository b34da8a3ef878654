//! Admin
//!
//! Product review and order fulfilment. Every route here sits behind the
//! reviewer guard.

pub(crate) mod orders;
pub(crate) mod products;
