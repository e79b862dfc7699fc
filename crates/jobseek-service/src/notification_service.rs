//! Notification service trait definitions.

use async_trait::async_trait;
use jobseek_core::{ChatMessage, JobseekResult, Notification, NotificationId, UserId};

/// Side effect fired after a message has been stored.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Records a "new message" notification for the receiver of `message`.
    async fn message_received(&self, message: &ChatMessage) -> JobseekResult<Notification>;
}

/// A user's notification inbox.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Lists the user's notifications, newest first.
    async fn list(&self, user_id: UserId) -> JobseekResult<Vec<Notification>>;

    /// Marks one of the user's notifications as read.
    async fn mark_read(&self, user_id: UserId, id: NotificationId) -> JobseekResult<Notification>;

    /// Marks all of the user's notifications as read.
    async fn mark_all_read(&self, user_id: UserId) -> JobseekResult<u64>;

    /// Deletes one of the user's notifications.
    async fn delete(&self, user_id: UserId, id: NotificationId) -> JobseekResult<()>;

    /// Deletes all of the user's notifications.
    async fn delete_all(&self, user_id: UserId) -> JobseekResult<u64>;
}
