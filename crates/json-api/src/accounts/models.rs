//! Account Models

use std::string::ToString;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wave_app::{
    auth::{IssuedApiToken, Session},
    domain::accounts::records::AccountRecord,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AccountResponse {
    /// The unique identifier of the account
    pub uuid: Uuid,

    /// Login email
    pub email: String,

    /// Display name
    pub full_name: String,

    /// Contact phone number
    pub phone: Option<String>,

    /// customer, vendor or admin
    pub role: String,

    /// The date and time the account was created
    pub created_at: String,

    /// The date and time the account was last updated
    pub updated_at: String,
}

impl From<AccountRecord> for AccountResponse {
    fn from(account: AccountRecord) -> Self {
        Self {
            uuid: account.uuid.into(),
            email: account.email,
            full_name: account.full_name,
            phone: account.phone,
            role: account.role.to_string(),
            created_at: account.created_at.to_string(),
            updated_at: account.updated_at.to_string(),
        }
    }
}

/// A signed-in account and its bearer token.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SessionResponse {
    /// The signed-in account
    pub account: AccountResponse,

    /// Bearer token, shown only once
    pub token: String,

    /// When the token stops working, if ever
    pub expires_at: Option<String>,
}

impl SessionResponse {
    pub(crate) fn new(account: AccountRecord, token: IssuedApiToken) -> Self {
        Self {
            account: account.into(),
            expires_at: token.metadata.expires_at.as_ref().map(ToString::to_string),
            token: token.token,
        }
    }
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self::new(session.account, session.token)
    }
}
