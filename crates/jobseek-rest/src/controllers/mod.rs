//! REST API controllers.

pub mod chat_controller;
pub mod health_controller;
pub mod notification_controller;
pub mod ws_controller;

pub use health_controller::*;
