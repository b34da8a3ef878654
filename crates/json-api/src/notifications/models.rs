//! Notification Models

use std::string::ToString;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wave_app::domain::notifications::records::NotificationRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NotificationResponse {
    /// The unique identifier of the notification
    pub uuid: Uuid,

    /// The order that triggered it, if any
    pub order_uuid: Option<Uuid>,

    /// Short title
    pub title: String,

    /// Body text
    pub message: String,

    /// Whether the vendor has read it
    pub read: bool,

    /// When it was first read
    pub read_at: Option<String>,

    /// The date and time the notification was created
    pub created_at: String,
}

impl From<NotificationRecord> for NotificationResponse {
    fn from(notification: NotificationRecord) -> Self {
        NotificationResponse {
            uuid: notification.uuid.into(),
            order_uuid: notification.order_uuid.map(Into::into),
            title: notification.title,
            message: notification.message,
            read: notification.read_at.is_some(),
            read_at: notification.read_at.as_ref().map(ToString::to_string),
            created_at: notification.created_at.to_string(),
        }
    }
}

/// A vendor's notifications, newest first
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NotificationsResponse {
    /// The list of notifications
    pub notifications: Vec<NotificationResponse>,

    /// How many are still unread
    pub unread: usize,
}

impl From<Vec<NotificationRecord>> for NotificationsResponse {
    fn from(notifications: Vec<NotificationRecord>) -> Self {
        let notifications: Vec<NotificationResponse> =
            notifications.into_iter().map(Into::into).collect();

        let unread = notifications.iter().filter(|n| !n.read).count();

        Self {
            notifications,
            unread,
        }
    }
}
