//! OpenAPI documentation for the REST API.

use crate::controllers::HealthResponse;
use jobseek_core::{
    ChatMessage, ErrorResponse, FieldError, MessageId, Notification, NotificationId, UserId,
    UserRole,
};
use jobseek_service::{CountResponse, SendMessageRequest};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the Jobseek messaging API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jobseek Messaging API",
        version = "1.0.0",
        description = "Chat and notification endpoints of the Jobseek marketplace",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        crate::controllers::chat_controller::send_message,
        crate::controllers::chat_controller::list_messages,
        crate::controllers::chat_controller::my_messages,
        crate::controllers::ws_controller::connect,
        crate::controllers::notification_controller::list_notifications,
        crate::controllers::notification_controller::mark_read,
        crate::controllers::notification_controller::mark_all_read,
        crate::controllers::notification_controller::delete_notification,
        crate::controllers::notification_controller::delete_all,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            UserId,
            MessageId,
            NotificationId,
            UserRole,
            ChatMessage,
            Notification,
            ErrorResponse,
            FieldError,
            SendMessageRequest,
            CountResponse,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "chat", description = "Chat messages and live connections"),
        (name = "notifications", description = "Notification inbox"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Security addon for JWT Bearer authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token authentication"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_chat_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/chat/send_message"));
        assert!(doc.paths.paths.contains_key("/notifications/{id}/read"));
    }
}
