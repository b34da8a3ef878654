//! Notification Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    notifications::{errors::into_status_error, models::NotificationsResponse},
    state::State,
};

/// Notification Index Handler
///
/// Returns the caller's sale notices, newest first.
#[endpoint(
    tags("notifications"),
    summary = "List Notifications",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<NotificationsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let notifications = state
        .app
        .notifications
        .list_notifications(principal.account_uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(notifications.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use wave_app::domain::notifications::{
        NotificationsServiceError, records::NotificationUuid,
    };

    use crate::{
        notifications::models::fixtures::make_notification,
        test_helpers::{Mocks, VENDOR, storage_error},
    };

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Some(VENDOR), Router::with_path("notifications").get(handler))
    }

    #[tokio::test]
    async fn test_index_counts_unread() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .notifications
            .expect_list_notifications()
            .once()
            .withf(|vendor| *vendor == VENDOR.account_uuid)
            .return_once(|vendor| {
                Ok(vec![
                    make_notification(NotificationUuid::new(), vendor, None),
                    make_notification(NotificationUuid::new(), vendor, Some(Timestamp::UNIX_EPOCH)),
                ])
            });

        let body: NotificationsResponse = TestClient::get("http://example.com/notifications")
            .send(&make_service(mocks))
            .await
            .take_json()
            .await?;

        assert_eq!(body.notifications.len(), 2);
        assert_eq!(body.unread, 1);
        assert_eq!(body.notifications[0].title, "New Sale!");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .notifications
            .expect_list_notifications()
            .once()
            .return_once(|_| Err(NotificationsServiceError::Sql(storage_error())));

        let res = TestClient::get("http://example.com/notifications")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
