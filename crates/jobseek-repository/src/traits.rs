//! Store trait definitions.
//!
//! Services depend on these traits only; MySQL and in-memory
//! implementations live in [`crate::mysql`] and [`crate::memory`].

use async_trait::async_trait;
use jobseek_core::{
    ChatMessage, JobseekResult, MessageFilter, NewChatMessage, NewNotification, Notification,
    NotificationId, UserId,
};

/// Durable, append-only chat message persistence.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persists a message and returns it with its assigned id and timestamp.
    async fn save(&self, message: NewChatMessage) -> JobseekResult<ChatMessage>;

    /// Returns matching messages, oldest first.
    async fn query(&self, filter: MessageFilter) -> JobseekResult<Vec<ChatMessage>>;

    /// Returns every message `user_id` sent or received, newest first.
    async fn for_user(&self, user_id: UserId) -> JobseekResult<Vec<ChatMessage>>;
}

/// Notification persistence. Every operation by id is scoped to the owner.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Persists a new, unread notification.
    async fn create(&self, notification: NewNotification) -> JobseekResult<Notification>;

    /// Returns the user's notifications, newest first.
    async fn list_for_user(&self, user_id: UserId) -> JobseekResult<Vec<Notification>>;

    /// Marks one notification as read. `None` if the user owns no such notification.
    async fn mark_read(
        &self,
        user_id: UserId,
        id: NotificationId,
    ) -> JobseekResult<Option<Notification>>;

    /// Marks every notification of the user as read and returns how many there were.
    async fn mark_all_read(&self, user_id: UserId) -> JobseekResult<u64>;

    /// Deletes one notification. `false` if the user owns no such notification.
    async fn delete(&self, user_id: UserId, id: NotificationId) -> JobseekResult<bool>;

    /// Deletes every notification of the user and returns how many were removed.
    async fn delete_all(&self, user_id: UserId) -> JobseekResult<u64>;
}

/// Read-only view of user profiles.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Returns the user's full name, if the user exists.
    async fn display_name(&self, user_id: UserId) -> JobseekResult<Option<String>>;
}
