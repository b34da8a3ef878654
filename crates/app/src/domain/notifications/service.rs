//! Notifications service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        accounts::records::AccountUuid,
        notifications::{
            errors::NotificationsServiceError,
            records::{NotificationRecord, NotificationUuid},
            repository::PgNotificationsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgNotificationsService {
    db: Db,
    repository: PgNotificationsRepository,
}

impl PgNotificationsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgNotificationsRepository::new(),
        }
    }
}

#[async_trait]
impl NotificationsService for PgNotificationsService {
    async fn list_notifications(
        &self,
        vendor: AccountUuid,
    ) -> Result<Vec<NotificationRecord>, NotificationsServiceError> {
        let mut tx = self.db.begin().await?;

        let notifications = self.repository.list_notifications(&mut tx, vendor).await?;

        tx.commit().await?;

        Ok(notifications)
    }

    #[tracing::instrument(
        name = "notifications.service.mark_read",
        skip(self),
        fields(vendor_uuid = %vendor, notification_uuid = %notification),
        err
    )]
    async fn mark_read(
        &self,
        vendor: AccountUuid,
        notification: NotificationUuid,
    ) -> Result<NotificationRecord, NotificationsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .mark_notification_read(&mut tx, vendor, notification)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    #[tracing::instrument(
        name = "notifications.service.delete_notification",
        skip(self),
        fields(vendor_uuid = %vendor, notification_uuid = %notification),
        err
    )]
    async fn delete_notification(
        &self,
        vendor: AccountUuid,
        notification: NotificationUuid,
    ) -> Result<(), NotificationsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .delete_notification(&mut tx, vendor, notification)
            .await?;

        if rows_affected == 0 {
            return Err(NotificationsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    /// Retrieves a vendor's notifications, newest first.
    async fn list_notifications(
        &self,
        vendor: AccountUuid,
    ) -> Result<Vec<NotificationRecord>, NotificationsServiceError>;

    /// Marks a notification read. Marking it again keeps the first read time.
    async fn mark_read(
        &self,
        vendor: AccountUuid,
        notification: NotificationUuid,
    ) -> Result<NotificationRecord, NotificationsServiceError>;

    /// Deletes a notification.
    async fn delete_notification(
        &self,
        vendor: AccountUuid,
        notification: NotificationUuid,
    ) -> Result<(), NotificationsServiceError>;
}
