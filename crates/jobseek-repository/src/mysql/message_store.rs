//! MySQL chat message store.

use super::now_millis;
use crate::{traits::MessageStore, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jobseek_core::{ChatMessage, JobseekResult, MessageFilter, MessageId, NewChatMessage, UserId};
use sqlx::{FromRow, MySql, QueryBuilder};
use std::sync::Arc;
use tracing::debug;

const SELECT_MESSAGES: &str =
    "SELECT id, sender_id, receiver_id, message, created_at FROM chat_messages WHERE deleted_at IS NULL";

/// Message store backed by the `chat_messages` table.
#[derive(Clone)]
pub struct MySqlMessageStore {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlMessageStore {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

impl std::fmt::Debug for MySqlMessageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlMessageStore").finish_non_exhaustive()
    }
}

#[derive(Debug, FromRow)]
struct MessageRow {
    id: u64,
    sender_id: u64,
    receiver_id: u64,
    message: String,
    created_at: DateTime<Utc>,
}

impl From<MessageRow> for ChatMessage {
    fn from(row: MessageRow) -> Self {
        Self {
            id: MessageId(row.id),
            sender_id: UserId(row.sender_id),
            receiver_id: UserId(row.receiver_id),
            body: row.message,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl MessageStore for MySqlMessageStore {
    async fn save(&self, message: NewChatMessage) -> JobseekResult<ChatMessage> {
        let created_at = now_millis();

        let result = sqlx::query(
            r#"
            INSERT INTO chat_messages (sender_id, receiver_id, message, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(message.sender_id.into_inner())
        .bind(message.receiver_id.into_inner())
        .bind(&message.body)
        .bind(created_at)
        .execute(self.pool.inner())
        .await?;

        let id = MessageId(result.last_insert_id());
        debug!(message_id = %id, sender_id = %message.sender_id, receiver_id = %message.receiver_id, "Message stored");

        Ok(ChatMessage {
            id,
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            body: message.body,
            created_at,
        })
    }

    async fn query(&self, filter: MessageFilter) -> JobseekResult<Vec<ChatMessage>> {
        debug!(?filter, "Querying messages");

        let mut builder = QueryBuilder::<MySql>::new(SELECT_MESSAGES);
        if let Some(sender_id) = filter.sender_id {
            builder.push(" AND sender_id = ").push_bind(sender_id.into_inner());
        }
        if let Some(receiver_id) = filter.receiver_id {
            builder.push(" AND receiver_id = ").push_bind(receiver_id.into_inner());
        }
        builder.push(" ORDER BY created_at ASC, id ASC");

        let rows = builder
            .build_query_as::<MessageRow>()
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(ChatMessage::from).collect())
    }

    async fn for_user(&self, user_id: UserId) -> JobseekResult<Vec<ChatMessage>> {
        debug!(user_id = %user_id, "Querying messages for user");

        let rows = sqlx::query_as::<_, MessageRow>(&format!(
            "{SELECT_MESSAGES} AND (sender_id = ? OR receiver_id = ?) ORDER BY created_at DESC, id DESC"
        ))
        .bind(user_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(ChatMessage::from).collect())
    }
}
