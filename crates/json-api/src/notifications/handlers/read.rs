//! Mark Notification Read Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    notifications::{errors::into_status_error, models::NotificationResponse},
    state::State,
};

/// Mark Notification Read Handler
///
/// Marking a notification that is already read keeps its first read time.
#[endpoint(
    tags("notifications"),
    summary = "Mark Notification Read",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Notification read"),
        (status_code = StatusCode::NOT_FOUND, description = "Notification not found"),
    ),
)]
pub(crate) async fn handler(
    notification: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<NotificationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let notification = state
        .app
        .notifications
        .mark_read(principal.account_uuid, notification.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(notification.into()))
}
