//! Delete Session Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{accounts::errors::auth_into_status_error, extensions::*, state::State};

/// Delete Session Handler
///
/// Revokes the bearer token used for this request.
#[endpoint(
    tags("sessions"),
    summary = "Sign Out",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Token revoked"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    state
        .app
        .auth
        .revoke_api_token(principal.token_uuid)
        .await
        .map_err(auth_into_status_error)?;

    Ok(StatusCode::OK)
}
