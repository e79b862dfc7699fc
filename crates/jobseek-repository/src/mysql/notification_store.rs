//! MySQL notification store.

use super::now_millis;
use crate::{traits::NotificationStore, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jobseek_core::{JobseekResult, NewNotification, Notification, NotificationId, UserId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Notification store backed by the `notifications` table.
#[derive(Clone)]
pub struct MySqlNotificationStore {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlNotificationStore {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn find(&self, user_id: UserId, id: NotificationId) -> JobseekResult<Option<Notification>> {
        let row = sqlx::query_as::<_, NotificationRow>(
            r#"
            SELECT id, user_id, message, is_read, created_at
            FROM notifications
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Notification::from))
    }
}

impl std::fmt::Debug for MySqlNotificationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlNotificationStore").finish_non_exhaustive()
    }
}

#[derive(Debug, FromRow)]
struct NotificationRow {
    id: u64,
    user_id: u64,
    message: String,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl From<NotificationRow> for Notification {
    fn from(row: NotificationRow) -> Self {
        Self {
            id: NotificationId(row.id),
            user_id: UserId(row.user_id),
            message: row.message,
            is_read: row.is_read,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl NotificationStore for MySqlNotificationStore {
    async fn create(&self, notification: NewNotification) -> JobseekResult<Notification> {
        let created_at = now_millis();

        let result = sqlx::query(
            r#"
            INSERT INTO notifications (user_id, message, is_read, created_at)
            VALUES (?, ?, FALSE, ?)
            "#,
        )
        .bind(notification.user_id.into_inner())
        .bind(&notification.message)
        .bind(created_at)
        .execute(self.pool.inner())
        .await?;

        let id = NotificationId(result.last_insert_id());
        debug!(notification_id = %id, user_id = %notification.user_id, "Notification stored");

        Ok(Notification {
            id,
            user_id: notification.user_id,
            message: notification.message,
            is_read: false,
            created_at,
        })
    }

    async fn list_for_user(&self, user_id: UserId) -> JobseekResult<Vec<Notification>> {
        debug!(user_id = %user_id, "Listing notifications");

        let rows = sqlx::query_as::<_, NotificationRow>(
            r#"
            SELECT id, user_id, message, is_read, created_at
            FROM notifications
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Notification::from).collect())
    }

    async fn mark_read(
        &self,
        user_id: UserId,
        id: NotificationId,
    ) -> JobseekResult<Option<Notification>> {
        let Some(mut notification) = self.find(user_id, id).await? else {
            return Ok(None);
        };

        if !notification.is_read {
            sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = ? AND user_id = ?")
                .bind(id.into_inner())
                .bind(user_id.into_inner())
                .execute(self.pool.inner())
                .await?;
            notification.is_read = true;
        }

        Ok(Some(notification))
    }

    async fn mark_all_read(&self, user_id: UserId) -> JobseekResult<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE user_id = ? AND is_read = FALSE",
        )
        .bind(user_id.into_inner())
        .execute(self.pool.inner())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, user_id: UserId, id: NotificationId) -> JobseekResult<bool> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = ? AND user_id = ?")
            .bind(id.into_inner())
            .bind(user_id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self, user_id: UserId) -> JobseekResult<u64> {
        let result = sqlx::query("DELETE FROM notifications WHERE user_id = ?")
            .bind(user_id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected())
    }
}
