//! Delete Notification Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, notifications::errors::into_status_error, state::State};

/// Delete Notification Handler
#[endpoint(
    tags("notifications"),
    summary = "Delete Notification",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Notification deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Notification not found"),
    ),
)]
pub(crate) async fn handler(
    notification: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    state
        .app
        .notifications
        .delete_notification(principal.account_uuid, notification.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
