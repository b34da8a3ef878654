//! Cart Repositories
//!
//! The cart row is locked for the whole of an action; its lines are read,
//! reduced in memory and written back in position order.

mod carts;
mod items;

pub(crate) use carts::PgCartsRepository;
pub(crate) use items::PgCartItemsRepository;
