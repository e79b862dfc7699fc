//! Notification DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of notifications touched by a bulk operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    pub count: u64,
}

impl From<u64> for CountResponse {
    fn from(count: u64) -> Self {
        Self { count }
    }
}
