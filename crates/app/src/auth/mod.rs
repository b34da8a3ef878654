//! Authentication

mod errors;
mod models;
pub mod openbao;
mod passwords;
mod repository;
mod service;
mod token;

pub use errors::*;
pub use models::*;
pub use openbao::{HmacVerifier, MockHmacVerifier, OpenBaoClient, OpenBaoConfig, OpenBaoError};
pub use passwords::build_password_input;
pub use repository::PgAuthRepository;
pub use service::*;
pub use token::*;
