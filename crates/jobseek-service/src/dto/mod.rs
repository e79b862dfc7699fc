//! Data Transfer Objects (DTOs).

mod chat_dto;
mod notification_dto;

pub use chat_dto::*;
pub use notification_dto::*;
