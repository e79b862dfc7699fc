//! Chat controller.

use crate::{
    controllers::ws_controller,
    extractors::{AuthenticatedUser, ValidatedJson},
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use jobseek_core::{ChatMessage, JobseekError, MessageFilter, UserId};
use jobseek_realtime::{ConnectionHub, OutboundFrame};
use jobseek_service::{MessageQuery, SendMessageRequest};
use tracing::{debug, warn};

/// Creates the chat router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/send_message", post(send_message))
        .route("/messages", get(list_messages))
        .route("/my-messages", get(my_messages))
        .route("/ws", get(ws_controller::connect))
}

/// Send a message to another user.
///
/// The message is stored first, then pushed to the receiver if they are
/// online, and a notification is recorded for them.
#[utoipa::path(
    post,
    path = "/chat/send_message",
    tag = "chat",
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message stored", body = ChatMessage),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = []))
)]
pub async fn send_message(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<SendMessageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ChatMessage>>), AppError> {
    let receiver_id = request.receiver();
    debug!(sender_id = %user.user_id, receiver_id = %receiver_id, "Send message request");

    let message = state
        .chat_service
        .send_message(user.user_id, receiver_id, request.message)
        .await?;

    push(&state.hub, receiver_id, &OutboundFrame::Message(message.clone()));

    match state.notification_sink.message_received(&message).await {
        Ok(notification) => push(&state.hub, receiver_id, &notification.into()),
        Err(e) => warn!(
            message_id = %message.id,
            receiver_id = %receiver_id,
            "Failed to record notification: {}",
            e
        ),
    }

    Ok(created(message))
}

/// List messages, oldest first.
///
/// Each filter applies on its own. Callers other than admins must name
/// themselves in at least one filter.
#[utoipa::path(
    get,
    path = "/chat/messages",
    tag = "chat",
    params(MessageQuery),
    responses(
        (status = 200, description = "Matching messages", body = [ChatMessage]),
        (status = 403, description = "Filter does not include the caller")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_messages(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<MessageQuery>,
) -> ApiResult<Vec<ChatMessage>> {
    let filter = MessageFilter::from(query);
    if !user.role.is_admin() && !filter.involves(user.user_id) {
        return Err(JobseekError::forbidden(
            "sender_id or receiver_id must be the caller",
        )
        .into());
    }

    let messages = state.chat_service.messages_between(filter).await?;
    ok(messages)
}

/// List the caller's sent and received messages, newest first.
#[utoipa::path(
    get,
    path = "/chat/my-messages",
    tag = "chat",
    responses(
        (status = 200, description = "Caller's messages", body = [ChatMessage])
    ),
    security(("bearer_auth" = []))
)]
pub async fn my_messages(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Vec<ChatMessage>> {
    let messages = state.chat_service.messages_for_user(user.user_id).await?;
    ok(messages)
}

fn push(hub: &ConnectionHub, target: UserId, frame: &OutboundFrame) {
    if let Err(e) = hub.deliver_frame(target, frame) {
        warn!(user_id = %target, "Failed to push frame: {}", e);
    }
}
