//! Get Current Account Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    accounts::{errors::into_status_error, models::AccountResponse},
    extensions::*,
    state::State,
};

/// Get Current Account Handler
#[endpoint(
    tags("accounts"),
    summary = "Get Current Account",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<AccountResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let account = state
        .app
        .accounts
        .get_account(principal.account_uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(account.into()))
}
