//! Notification inbox controller.
//!
//! Every operation is scoped to the caller. An id that belongs to someone
//! else answers 404, the same as an id that does not exist.

use crate::{
    extractors::AuthenticatedUser,
    responses::{no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch},
    Router,
};
use jobseek_core::{Notification, NotificationId};
use jobseek_service::CountResponse;
use tracing::debug;

/// Creates the notification router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/read-all", patch(mark_all_read))
        .route("/delete-all", delete(delete_all))
        .route("/:id/read", patch(mark_read))
        .route("/:id", delete(delete_notification))
}

/// List the caller's notifications, newest first.
#[utoipa::path(
    get,
    path = "/notifications",
    tag = "notifications",
    responses(
        (status = 200, description = "Caller's notifications", body = [Notification])
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Vec<Notification>> {
    let notifications = state.notification_service.list(user.user_id).await?;
    ok(notifications)
}

/// Mark one notification as read.
#[utoipa::path(
    patch,
    path = "/notifications/{id}/read",
    tag = "notifications",
    params(("id" = u64, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification marked as read", body = Notification),
        (status = 404, description = "No such notification for the caller")
    ),
    security(("bearer_auth" = []))
)]
pub async fn mark_read(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<NotificationId>,
) -> ApiResult<Notification> {
    debug!(user_id = %user.user_id, notification_id = %id, "Mark notification read");
    let notification = state.notification_service.mark_read(user.user_id, id).await?;
    ok(notification)
}

/// Mark all of the caller's notifications as read.
#[utoipa::path(
    patch,
    path = "/notifications/read-all",
    tag = "notifications",
    responses(
        (status = 200, description = "Number of notifications updated", body = CountResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn mark_all_read(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<CountResponse> {
    let count = state.notification_service.mark_all_read(user.user_id).await?;
    ok(count.into())
}

/// Delete one notification.
#[utoipa::path(
    delete,
    path = "/notifications/{id}",
    tag = "notifications",
    params(("id" = u64, Path, description = "Notification ID")),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 404, description = "No such notification for the caller")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<NotificationId>,
) -> Result<StatusCode, AppError> {
    debug!(user_id = %user.user_id, notification_id = %id, "Delete notification");
    state.notification_service.delete(user.user_id, id).await?;
    Ok(no_content())
}

/// Delete all of the caller's notifications.
#[utoipa::path(
    delete,
    path = "/notifications/delete-all",
    tag = "notifications",
    responses(
        (status = 200, description = "Number of notifications deleted", body = CountResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_all(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<CountResponse> {
    let count = state.notification_service.delete_all(user.user_id).await?;
    ok(count.into())
}
