//! Notification Records

use jiff::Timestamp;

use crate::{
    domain::{accounts::records::AccountUuid, orders::records::OrderUuid},
    uuids::TypedUuid,
};

/// Notification UUID
pub type NotificationUuid = TypedUuid<NotificationRecord>;

/// Notification Record
#[derive(Debug, Clone)]
pub struct NotificationRecord {
    pub uuid: NotificationUuid,
    pub vendor_uuid: AccountUuid,
    pub order_uuid: Option<OrderUuid>,
    pub title: String,
    pub message: String,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
