//! Domain entities and value objects.

pub mod chat_message;
pub mod identity;
pub mod notification;

pub use chat_message::{ChatMessage, MessageFilter, NewChatMessage};
pub use identity::{Identity, UserRole};
pub use notification::{NewNotification, Notification};
