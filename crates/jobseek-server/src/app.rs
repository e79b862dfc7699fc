//! Application assembly.
//!
//! Collaborators are plain constructor arguments: stores go into services,
//! services and the hub go into the router state.

use axum::Router;
use jobseek_config::AppConfig;
use jobseek_realtime::ConnectionHub;
use jobseek_repository::{
    DatabasePoolInterface, InMemoryMessageStore, InMemoryNotificationStore, InMemoryUserDirectory,
    MessageStore, MySqlMessageStore, MySqlNotificationStore, MySqlUserDirectory,
    NotificationStore, UserDirectory,
};
use jobseek_rest::{create_router, AppState, MetricsEndpoint};
use jobseek_security::TokenVerifier;
use jobseek_service::{ChatServiceImpl, NotificationServiceImpl};
use std::sync::Arc;
use tracing::info;

/// Persistence collaborators.
#[derive(Clone)]
pub struct Stores {
    pub messages: Arc<dyn MessageStore>,
    pub notifications: Arc<dyn NotificationStore>,
    pub users: Arc<dyn UserDirectory>,
}

impl Stores {
    /// MySQL-backed stores sharing one pool.
    pub fn mysql(pool: &Arc<dyn DatabasePoolInterface>) -> Self {
        Self {
            messages: Arc::new(MySqlMessageStore::new(pool.clone())),
            notifications: Arc::new(MySqlNotificationStore::new(pool.clone())),
            users: Arc::new(MySqlUserDirectory::new(pool.clone())),
        }
    }

    /// Process-local stores, for tests and local experiments.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            messages: Arc::new(InMemoryMessageStore::new()),
            notifications: Arc::new(InMemoryNotificationStore::new()),
            users: Arc::new(InMemoryUserDirectory::new()),
        }
    }
}

/// Builds the HTTP application from configuration and stores.
pub fn build_app(
    config: &AppConfig,
    stores: Stores,
    database: Option<Arc<dyn DatabasePoolInterface>>,
    metrics: Option<MetricsEndpoint>,
) -> Router {
    let chat_service = Arc::new(ChatServiceImpl::new(stores.messages));
    let notification_service = Arc::new(NotificationServiceImpl::new(
        stores.notifications,
        stores.users,
    ));
    let hub = Arc::new(ConnectionHub::from_config(&config.hub));
    info!(
        queue_capacity = config.hub.outbound_queue_capacity,
        "Connection hub ready"
    );

    let mut state = AppState::new(
        chat_service,
        notification_service.clone(),
        notification_service,
        hub,
    );
    if let Some(database) = database {
        state = state.with_database(database);
    }

    let token_verifier = Arc::new(TokenVerifier::new(&config.security));
    create_router(state, token_verifier, &config.server, metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn status(router: Router, uri: &str) -> StatusCode {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_in_memory_app_serves_health() {
        let router = build_app(&AppConfig::default(), Stores::in_memory(), None, None);
        assert_eq!(status(router.clone(), "/health").await, StatusCode::OK);
        assert_eq!(status(router.clone(), "/health/ready").await, StatusCode::OK);
        assert_eq!(
            status(router, "/api/v1/chat/my-messages").await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn test_metrics_route_absent_when_disabled() {
        let router = build_app(&AppConfig::default(), Stores::in_memory(), None, None);
        assert_eq!(status(router, "/metrics").await, StatusCode::NOT_FOUND);
    }
}
