//! Sessions
//!
//! Signing in issues a fresh bearer token; signing out revokes the token the
//! request was made with.

mod handlers;

pub(crate) use handlers::*;
