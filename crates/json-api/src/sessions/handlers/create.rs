//! Create Session Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use wave_app::auth::Credentials;

use crate::{
    accounts::{errors::auth_into_status_error, models::SessionResponse},
    extensions::*,
    state::State,
};

/// Sign In Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .finish()
    }
}

impl From<SignInRequest> for Credentials {
    fn from(request: SignInRequest) -> Self {
        Credentials {
            email: request.email,
            password: request.password,
        }
    }
}

/// Create Session Handler
///
/// Checks an email and password and returns a new bearer token.
#[endpoint(
    tags("sessions"),
    summary = "Sign In",
    responses(
        (status_code = StatusCode::OK, description = "Signed in"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid email or password"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SignInRequest>,
    depot: &mut Depot,
) -> Result<Json<SessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let session = state
        .app
        .auth
        .sign_in(json.into_inner().into())
        .await
        .map_err(auth_into_status_error)?;

    Ok(Json(session.into()))
}
