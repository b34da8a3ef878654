//! Notifications Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    accounts::records::AccountUuid,
    notifications::records::{NotificationRecord, NotificationUuid},
    orders::records::OrderUuid,
};

const CREATE_NOTIFICATION_SQL: &str = include_str!("sql/create_notification.sql");
const LIST_NOTIFICATIONS_SQL: &str = include_str!("sql/list_notifications.sql");
const MARK_NOTIFICATION_READ_SQL: &str = include_str!("sql/mark_notification_read.sql");
const DELETE_NOTIFICATION_SQL: &str = include_str!("sql/delete_notification.sql");

/// Notification row to insert.
#[derive(Debug, Clone)]
pub(crate) struct NewNotificationRow<'a> {
    pub(crate) uuid: NotificationUuid,
    pub(crate) vendor: AccountUuid,
    pub(crate) order: Option<OrderUuid>,
    pub(crate) title: &'a str,
    pub(crate) message: &'a str,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgNotificationsRepository;

impl PgNotificationsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_notification(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        notification: &NewNotificationRow<'_>,
    ) -> Result<NotificationRecord, sqlx::Error> {
        query_as::<Postgres, NotificationRecord>(CREATE_NOTIFICATION_SQL)
            .bind(notification.uuid.into_uuid())
            .bind(notification.vendor.into_uuid())
            .bind(notification.order.map(OrderUuid::into_uuid))
            .bind(notification.title)
            .bind(notification.message)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_notifications(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        vendor: AccountUuid,
    ) -> Result<Vec<NotificationRecord>, sqlx::Error> {
        query_as::<Postgres, NotificationRecord>(LIST_NOTIFICATIONS_SQL)
            .bind(vendor.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn mark_notification_read(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        vendor: AccountUuid,
        notification: NotificationUuid,
    ) -> Result<NotificationRecord, sqlx::Error> {
        query_as::<Postgres, NotificationRecord>(MARK_NOTIFICATION_READ_SQL)
            .bind(notification.into_uuid())
            .bind(vendor.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_notification(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        vendor: AccountUuid,
        notification: NotificationUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_NOTIFICATION_SQL)
            .bind(notification.into_uuid())
            .bind(vendor.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for NotificationRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: NotificationUuid::from_uuid(row.try_get("uuid")?),
            vendor_uuid: AccountUuid::from_uuid(row.try_get("vendor_uuid")?),
            order_uuid: row
                .try_get::<Option<Uuid>, _>("order_uuid")?
                .map(OrderUuid::from_uuid),
            title: row.try_get("title")?,
            message: row.try_get("message")?,
            read_at: row
                .try_get::<Option<SqlxTimestamp>, _>("read_at")?
                .map(SqlxTimestamp::to_jiff),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
