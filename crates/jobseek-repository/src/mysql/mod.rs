//! MySQL store implementations.

mod message_store;
mod notification_store;
mod user_directory;

pub use message_store::MySqlMessageStore;
pub use notification_store::MySqlNotificationStore;
pub use user_directory::MySqlUserDirectory;

use chrono::{DateTime, SubsecRound, Utc};

/// Current time at the precision of a `DATETIME(3)` column, so that the
/// value handed back after an insert equals the one read back later.
pub(crate) fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
