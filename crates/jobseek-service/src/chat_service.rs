//! Chat service trait definition.

use async_trait::async_trait;
use jobseek_core::{ChatMessage, JobseekResult, MessageFilter, UserId};

/// Creates and reads chat messages.
///
/// Implementations never touch live connections: a returned message is
/// durably stored, and what happens next is up to the caller.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Persists a message from `sender_id` to `receiver_id`.
    async fn send_message(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        body: String,
    ) -> JobseekResult<ChatMessage>;

    /// Messages matching the filter, oldest first.
    async fn messages_between(&self, filter: MessageFilter) -> JobseekResult<Vec<ChatMessage>>;

    /// Messages the user sent or received, newest first.
    async fn messages_for_user(&self, user_id: UserId) -> JobseekResult<Vec<ChatMessage>>;
}
