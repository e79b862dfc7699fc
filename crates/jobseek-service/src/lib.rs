//! # Jobseek Service
//!
//! Application services for the messaging core.
//!
//! [`ChatService`] is the single entry point for creating messages, shared by
//! the HTTP API and live connections. It persists and returns; live delivery
//! and notifications are left to the caller. [`NotificationService`] and
//! [`NotificationSink`] cover the notification side effect and the
//! notification inbox.

pub mod chat_service;
pub mod dto;
pub mod r#impl;
pub mod notification_service;

pub use chat_service::*;
pub use dto::*;
pub use notification_service::*;
pub use r#impl::{ChatServiceImpl, NotificationServiceImpl};
