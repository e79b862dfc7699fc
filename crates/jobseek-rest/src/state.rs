//! Application state for Axum handlers.

use jobseek_realtime::ConnectionHub;
use jobseek_repository::DatabasePoolInterface;
use jobseek_service::{ChatService, NotificationService, NotificationSink};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<dyn ChatService>,
    pub notification_service: Arc<dyn NotificationService>,
    pub notification_sink: Arc<dyn NotificationSink>,
    pub hub: Arc<ConnectionHub>,
    /// Pinged by the readiness probe when present.
    pub database: Option<Arc<dyn DatabasePoolInterface>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        chat_service: Arc<dyn ChatService>,
        notification_service: Arc<dyn NotificationService>,
        notification_sink: Arc<dyn NotificationSink>,
        hub: Arc<ConnectionHub>,
    ) -> Self {
        Self {
            chat_service,
            notification_service,
            notification_sink,
            hub,
            database: None,
        }
    }

    /// Attaches the database pool checked by `/health/ready`.
    #[must_use]
    pub fn with_database(mut self, database: Arc<dyn DatabasePoolInterface>) -> Self {
        self.database = Some(database);
        self
    }
}
