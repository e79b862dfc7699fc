//! In-memory stores for tests and local development.
//!
//! They follow the same ordering and ownership rules as the MySQL stores.

use crate::traits::{MessageStore, NotificationStore, UserDirectory};
use async_trait::async_trait;
use chrono::Utc;
use jobseek_core::{
    ChatMessage, JobseekResult, MessageFilter, MessageId, NewChatMessage, NewNotification,
    Notification, NotificationId, UserId,
};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Message store kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryMessageStore {
    messages: Mutex<Vec<ChatMessage>>,
}

impl InMemoryMessageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn save(&self, message: NewChatMessage) -> JobseekResult<ChatMessage> {
        let mut messages = self.messages.lock();
        let stored = ChatMessage {
            id: MessageId(messages.len() as u64 + 1),
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            body: message.body,
            created_at: Utc::now(),
        };
        messages.push(stored.clone());
        Ok(stored)
    }

    async fn query(&self, filter: MessageFilter) -> JobseekResult<Vec<ChatMessage>> {
        let mut found: Vec<ChatMessage> = self
            .messages
            .lock()
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect();
        found.sort_by_key(|m| (m.created_at, m.id));
        Ok(found)
    }

    async fn for_user(&self, user_id: UserId) -> JobseekResult<Vec<ChatMessage>> {
        let mut found: Vec<ChatMessage> = self
            .messages
            .lock()
            .iter()
            .filter(|m| m.sender_id == user_id || m.receiver_id == user_id)
            .cloned()
            .collect();
        found.sort_by_key(|m| std::cmp::Reverse((m.created_at, m.id)));
        Ok(found)
    }
}

/// Notification store kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryNotificationStore {
    state: Mutex<NotificationState>,
}

#[derive(Debug, Default)]
struct NotificationState {
    next_id: u64,
    rows: Vec<Notification>,
}

impl InMemoryNotificationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn create(&self, notification: NewNotification) -> JobseekResult<Notification> {
        let mut state = self.state.lock();
        state.next_id += 1;
        let stored = Notification {
            id: NotificationId(state.next_id),
            user_id: notification.user_id,
            message: notification.message,
            is_read: false,
            created_at: Utc::now(),
        };
        state.rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_for_user(&self, user_id: UserId) -> JobseekResult<Vec<Notification>> {
        let mut found: Vec<Notification> = self
            .state
            .lock()
            .rows
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by_key(|n| std::cmp::Reverse((n.created_at, n.id)));
        Ok(found)
    }

    async fn mark_read(
        &self,
        user_id: UserId,
        id: NotificationId,
    ) -> JobseekResult<Option<Notification>> {
        let mut state = self.state.lock();
        Ok(state
            .rows
            .iter_mut()
            .find(|n| n.id == id && n.user_id == user_id)
            .map(|n| {
                n.is_read = true;
                n.clone()
            }))
    }

    async fn mark_all_read(&self, user_id: UserId) -> JobseekResult<u64> {
        let mut state = self.state.lock();
        let mut updated = 0;
        for n in state.rows.iter_mut().filter(|n| n.user_id == user_id && !n.is_read) {
            n.is_read = true;
            updated += 1;
        }
        Ok(updated)
    }

    async fn delete(&self, user_id: UserId, id: NotificationId) -> JobseekResult<bool> {
        let mut state = self.state.lock();
        let before = state.rows.len();
        state.rows.retain(|n| !(n.id == id && n.user_id == user_id));
        Ok(state.rows.len() < before)
    }

    async fn delete_all(&self, user_id: UserId) -> JobseekResult<u64> {
        let mut state = self.state.lock();
        let before = state.rows.len();
        state.rows.retain(|n| n.user_id != user_id);
        Ok((before - state.rows.len()) as u64)
    }
}

/// User directory backed by a fixed map of names.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    names: Mutex<HashMap<UserId, String>>,
}

impl InMemoryUserDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper for tests.
    #[must_use]
    pub fn with_user(self, user_id: UserId, full_name: impl Into<String>) -> Self {
        self.names.lock().insert(user_id, full_name.into());
        self
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn display_name(&self, user_id: UserId) -> JobseekResult<Option<String>> {
        Ok(self.names.lock().get(&user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_saved_message_is_queried_exactly_once() {
        let store = InMemoryMessageStore::new();
        let saved = store
            .save(NewChatMessage::new(UserId(1), UserId(2), "hi"))
            .await
            .unwrap();
        store
            .save(NewChatMessage::new(UserId(2), UserId(1), "hello"))
            .await
            .unwrap();

        let found = store
            .query(MessageFilter::between(UserId(1), UserId(2)))
            .await
            .unwrap();
        assert_eq!(found, vec![saved]);
    }

    #[tokio::test]
    async fn test_query_orders_oldest_first() {
        let store = InMemoryMessageStore::new();
        for body in ["one", "two", "three"] {
            store
                .save(NewChatMessage::new(UserId(1), UserId(2), body))
                .await
                .unwrap();
        }

        let bodies: Vec<String> = store
            .query(MessageFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.body)
            .collect();
        assert_eq!(bodies, ["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_for_user_is_newest_first_and_covers_both_directions() {
        let store = InMemoryMessageStore::new();
        store.save(NewChatMessage::new(UserId(1), UserId(2), "a")).await.unwrap();
        store.save(NewChatMessage::new(UserId(2), UserId(1), "b")).await.unwrap();
        store.save(NewChatMessage::new(UserId(3), UserId(4), "c")).await.unwrap();

        let bodies: Vec<String> = store
            .for_user(UserId(1))
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.body)
            .collect();
        assert_eq!(bodies, ["b", "a"]);
    }

    #[tokio::test]
    async fn test_notifications_are_scoped_to_owner() {
        let store = InMemoryNotificationStore::new();
        let mine = store
            .create(NewNotification::new(UserId(1), "for one"))
            .await
            .unwrap();
        store
            .create(NewNotification::new(UserId(2), "for two"))
            .await
            .unwrap();

        assert!(store.mark_read(UserId(2), mine.id).await.unwrap().is_none());
        assert!(!store.delete(UserId(2), mine.id).await.unwrap());

        let read = store.mark_read(UserId(1), mine.id).await.unwrap().unwrap();
        assert!(read.is_read);
        assert_eq!(store.delete_all(UserId(1)).await.unwrap(), 1);
        assert_eq!(store.list_for_user(UserId(2)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mark_all_read_counts_unread_only() {
        let store = InMemoryNotificationStore::new();
        let first = store
            .create(NewNotification::new(UserId(1), "first"))
            .await
            .unwrap();
        store
            .create(NewNotification::new(UserId(1), "second"))
            .await
            .unwrap();
        store.mark_read(UserId(1), first.id).await.unwrap();

        assert_eq!(store.mark_all_read(UserId(1)).await.unwrap(), 1);
        assert!(store
            .list_for_user(UserId(1))
            .await
            .unwrap()
            .iter()
            .all(|n| n.is_read));
    }
}
