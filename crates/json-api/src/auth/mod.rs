//! Authentication and role checks

pub(crate) mod guards;
pub(crate) mod middleware;
