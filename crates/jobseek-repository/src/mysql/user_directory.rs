//! MySQL user directory.

use crate::{traits::UserDirectory, DatabasePoolInterface};
use async_trait::async_trait;
use jobseek_core::{JobseekResult, UserId};
use std::sync::Arc;

/// Reads display names from the `users` table.
#[derive(Clone)]
pub struct MySqlUserDirectory {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlUserDirectory {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

impl std::fmt::Debug for MySqlUserDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserDirectory").finish_non_exhaustive()
    }
}

#[async_trait]
impl UserDirectory for MySqlUserDirectory {
    async fn display_name(&self, user_id: UserId) -> JobseekResult<Option<String>> {
        let name = sqlx::query_scalar::<_, String>(
            "SELECT full_name FROM users WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(user_id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(name)
    }
}
