//! # Jobseek Repository
//!
//! Persistence for the messaging core.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn MessageStore> / Arc<dyn NotificationStore> / Arc<dyn UserDirectory>
//! MySql*Store                   (SQLx over a shared DatabasePool)
//!   ↓
//! MySQL
//! ```
//!
//! [`memory`] holds process-local implementations with the same contracts,
//! used by tests across the workspace.

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use memory::{InMemoryMessageStore, InMemoryNotificationStore, InMemoryUserDirectory};
pub use mysql::*;
pub use pool::*;
pub use traits::*;
