//! Create Account Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use wave::accounts::Role;
use wave_app::domain::accounts::{data::NewAccount, records::AccountUuid};

use crate::{
    accounts::{
        errors::{auth_into_status_error, into_status_error},
        models::SessionResponse,
    },
    extensions::*,
    state::State,
};

/// Roles that may be chosen at sign-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SignUpRole {
    /// Shops and checks out
    #[default]
    Customer,

    /// Sells products
    Vendor,
}

impl From<SignUpRole> for Role {
    fn from(role: SignUpRole) -> Self {
        match role {
            SignUpRole::Customer => Role::Customer,
            SignUpRole::Vendor => Role::Vendor,
        }
    }
}

/// Create Account Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateAccountRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: SignUpRole,
}

impl std::fmt::Debug for CreateAccountRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAccountRequest")
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .field("full_name", &self.full_name)
            .field("phone", &self.phone)
            .field("role", &self.role)
            .finish()
    }
}

impl From<CreateAccountRequest> for NewAccount {
    fn from(request: CreateAccountRequest) -> Self {
        NewAccount {
            uuid: AccountUuid::new(),
            email: request.email,
            password: request.password,
            full_name: request.full_name,
            phone: request.phone,
            role: request.role.into(),
        }
    }
}

/// Create Account Handler
///
/// Signs up a customer or vendor and returns a bearer token for it.
#[endpoint(
    tags("accounts"),
    summary = "Sign Up",
    responses(
        (status_code = StatusCode::CREATED, description = "Account created"),
        (status_code = StatusCode::CONFLICT, description = "Email already registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateAccountRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let account = state
        .app
        .accounts
        .register(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    let token = state
        .app
        .auth
        .issue_api_token(account.uuid, None)
        .await
        .map_err(auth_into_status_error)?;

    res.add_header(LOCATION, "/accounts/me", true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(SessionResponse::new(account, token)))
}
