//! Notification service implementation.

use crate::notification_service::{NotificationService, NotificationSink};
use async_trait::async_trait;
use jobseek_core::{
    ChatMessage, JobseekError, JobseekResult, NewNotification, Notification, NotificationId,
    UserId,
};
use jobseek_repository::{NotificationStore, UserDirectory};
use std::sync::Arc;
use tracing::{debug, info};

/// Notification inbox and "new message" notifier.
pub struct NotificationServiceImpl {
    notification_store: Arc<dyn NotificationStore>,
    user_directory: Arc<dyn UserDirectory>,
}

impl NotificationServiceImpl {
    #[must_use]
    pub fn new(
        notification_store: Arc<dyn NotificationStore>,
        user_directory: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            notification_store,
            user_directory,
        }
    }

    async fn sender_name(&self, sender_id: UserId) -> JobseekResult<String> {
        Ok(self
            .user_directory
            .display_name(sender_id)
            .await?
            .unwrap_or_else(|| format!("user #{sender_id}")))
    }
}

impl std::fmt::Debug for NotificationServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationServiceImpl").finish_non_exhaustive()
    }
}

#[async_trait]
impl NotificationSink for NotificationServiceImpl {
    async fn message_received(&self, message: &ChatMessage) -> JobseekResult<Notification> {
        let name = self.sender_name(message.sender_id).await?;
        let notification = self
            .notification_store
            .create(NewNotification::new(
                message.receiver_id,
                format!("You received a new message from {name}"),
            ))
            .await?;

        debug!(
            notification_id = %notification.id,
            user_id = %notification.user_id,
            message_id = %message.id,
            "New message notification created"
        );
        Ok(notification)
    }
}

#[async_trait]
impl NotificationService for NotificationServiceImpl {
    async fn list(&self, user_id: UserId) -> JobseekResult<Vec<Notification>> {
        debug!(user_id = %user_id, "Listing notifications");
        self.notification_store.list_for_user(user_id).await
    }

    async fn mark_read(&self, user_id: UserId, id: NotificationId) -> JobseekResult<Notification> {
        self.notification_store
            .mark_read(user_id, id)
            .await?
            .ok_or_else(|| JobseekError::not_found("Notification", id))
    }

    async fn mark_all_read(&self, user_id: UserId) -> JobseekResult<u64> {
        let count = self.notification_store.mark_all_read(user_id).await?;
        info!(user_id = %user_id, count, "Notifications marked as read");
        Ok(count)
    }

    async fn delete(&self, user_id: UserId, id: NotificationId) -> JobseekResult<()> {
        if self.notification_store.delete(user_id, id).await? {
            Ok(())
        } else {
            Err(JobseekError::not_found("Notification", id))
        }
    }

    async fn delete_all(&self, user_id: UserId) -> JobseekResult<u64> {
        let count = self.notification_store.delete_all(user_id).await?;
        info!(user_id = %user_id, count, "Notifications deleted");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jobseek_core::MessageId;
    use jobseek_repository::{InMemoryNotificationStore, InMemoryUserDirectory};

    fn message(id: u64, sender: u64, receiver: u64) -> ChatMessage {
        ChatMessage {
            id: MessageId(id),
            sender_id: UserId(sender),
            receiver_id: UserId(receiver),
            body: "hi".to_string(),
            created_at: Utc::now(),
        }
    }

    fn service() -> NotificationServiceImpl {
        NotificationServiceImpl::new(
            Arc::new(InMemoryNotificationStore::new()),
            Arc::new(InMemoryUserDirectory::new().with_user(UserId(1), "Budi Santoso")),
        )
    }

    #[tokio::test]
    async fn test_message_received_names_sender() {
        let service = service();

        let notification = service
            .message_received(&message(10, 1, 2))
            .await
            .unwrap();

        assert_eq!(notification.user_id, UserId(2));
        assert_eq!(
            notification.message,
            "You received a new message from Budi Santoso"
        );
        assert!(!notification.is_read);
        assert_eq!(service.list(UserId(2)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_sender_falls_back_to_id() {
        let service = service();

        let notification = service
            .message_received(&message(11, 99, 2))
            .await
            .unwrap();
        assert_eq!(
            notification.message,
            "You received a new message from user #99"
        );
    }

    #[tokio::test]
    async fn test_foreign_notification_is_not_found() {
        let service = service();
        let notification = service
            .message_received(&message(12, 1, 2))
            .await
            .unwrap();

        let err = service.mark_read(UserId(3), notification.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        let err = service.delete(UserId(3), notification.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);

        assert!(service.mark_read(UserId(2), notification.id).await.unwrap().is_read);
        service.delete(UserId(2), notification.id).await.unwrap();
        assert!(service.list(UserId(2)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bulk_operations_return_counts() {
        let service = service();
        for id in 1..=3 {
            service
                .message_received(&message(id, 1, 2))
                .await
                .unwrap();
        }

        assert_eq!(service.mark_all_read(UserId(2)).await.unwrap(), 3);
        assert_eq!(service.mark_all_read(UserId(2)).await.unwrap(), 0);
        assert_eq!(service.delete_all(UserId(2)).await.unwrap(), 3);
    }
}
