//! Service implementations.

mod chat_service_impl;
mod notification_service_impl;

pub use chat_service_impl::ChatServiceImpl;
pub use notification_service_impl::NotificationServiceImpl;
