//! Chat service implementation.

use crate::chat_service::ChatService;
use async_trait::async_trait;
use jobseek_core::{ChatMessage, JobseekError, JobseekResult, MessageFilter, NewChatMessage, UserId};
use jobseek_repository::MessageStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Chat service over a [`MessageStore`].
pub struct ChatServiceImpl {
    message_store: Arc<dyn MessageStore>,
}

impl ChatServiceImpl {
    #[must_use]
    pub fn new(message_store: Arc<dyn MessageStore>) -> Self {
        Self { message_store }
    }
}

impl std::fmt::Debug for ChatServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatServiceImpl").finish_non_exhaustive()
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn send_message(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        body: String,
    ) -> JobseekResult<ChatMessage> {
        debug!(sender_id = %sender_id, receiver_id = %receiver_id, "Sending message");

        if body.trim().is_empty() {
            return Err(JobseekError::validation("Message must not be blank"));
        }

        let stored = self
            .message_store
            .save(NewChatMessage::new(sender_id, receiver_id, body))
            .await?;

        info!(
            message_id = %stored.id,
            sender_id = %sender_id,
            receiver_id = %receiver_id,
            "Message stored"
        );
        Ok(stored)
    }

    async fn messages_between(&self, filter: MessageFilter) -> JobseekResult<Vec<ChatMessage>> {
        debug!(?filter, "Listing messages");
        self.message_store.query(filter).await
    }

    async fn messages_for_user(&self, user_id: UserId) -> JobseekResult<Vec<ChatMessage>> {
        debug!(user_id = %user_id, "Listing messages for user");
        self.message_store.for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobseek_repository::InMemoryMessageStore;
    use mockall::{mock, predicate::eq};

    mock! {
        pub Store {}

        #[async_trait]
        impl MessageStore for Store {
            async fn save(&self, message: NewChatMessage) -> JobseekResult<ChatMessage>;
            async fn query(&self, filter: MessageFilter) -> JobseekResult<Vec<ChatMessage>>;
            async fn for_user(&self, user_id: UserId) -> JobseekResult<Vec<ChatMessage>>;
        }
    }

    fn service() -> (ChatServiceImpl, Arc<InMemoryMessageStore>) {
        let store = Arc::new(InMemoryMessageStore::new());
        (ChatServiceImpl::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_send_returns_stored_message() {
        let (service, store) = service();

        let sent = service
            .send_message(UserId(1), UserId(2), "hi".to_string())
            .await
            .unwrap();

        assert_eq!(sent.sender_id, UserId(1));
        assert_eq!(sent.receiver_id, UserId(2));
        assert_eq!(sent.body, "hi");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_sent_message_appears_once_in_pair_query() {
        let (service, _) = service();
        let sent = service
            .send_message(UserId(1), UserId(2), "hi".to_string())
            .await
            .unwrap();
        service
            .send_message(UserId(2), UserId(1), "back".to_string())
            .await
            .unwrap();

        let found = service
            .messages_between(MessageFilter::between(UserId(1), UserId(2)))
            .await
            .unwrap();
        assert_eq!(found.iter().filter(|m| m.id == sent.id).count(), 1);
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_messages_for_offline_receiver_are_readable_later() {
        let (service, _) = service();
        service
            .send_message(UserId(1), UserId(2), "are you there?".to_string())
            .await
            .unwrap();

        let inbox = service.messages_for_user(UserId(2)).await.unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].body, "are you there?");
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected_before_storing() {
        let mut store = MockStore::new();
        store.expect_save().never();
        let service = ChatServiceImpl::new(Arc::new(store));

        let err = service
            .send_message(UserId(1), UserId(2), "  \n".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let mut store = MockStore::new();
        store
            .expect_save()
            .with(eq(NewChatMessage::new(UserId(1), UserId(2), "hi")))
            .times(1)
            .returning(|_| Err(JobseekError::Database("connection refused".to_string())));
        let service = ChatServiceImpl::new(Arc::new(store));

        let err = service
            .send_message(UserId(1), UserId(2), "hi".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, JobseekError::Database(_)));
    }
}
