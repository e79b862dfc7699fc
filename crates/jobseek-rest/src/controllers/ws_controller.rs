//! Live chat connection endpoint.

use crate::{extractors::AuthenticatedUser, state::AppState};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{future, SinkExt, StreamExt};
use jobseek_realtime::ClientSession;

/// Upgrade to a live chat connection for the authenticated caller.
///
/// Inbound text frames are chat messages; binary and control frames are
/// ignored. A close frame ends the session.
#[utoipa::path(
    get,
    path = "/chat/ws",
    tag = "chat",
    params(("token" = Option<String>, Query, description = "Bearer token when headers cannot be set")),
    responses(
        (status = 101, description = "Switching to websocket"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn connect(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ws: WebSocketUpgrade,
) -> Response {
    let session = ClientSession::new(state.hub.clone(), state.chat_service.clone(), user.user_id);
    ws.on_upgrade(move |socket| serve(session, socket))
}

async fn serve(session: ClientSession, socket: WebSocket) {
    let (sink, stream) = socket.split();

    let reader = stream
        .take_while(|frame| future::ready(!matches!(frame, Ok(Message::Close(_)))))
        .filter_map(|frame| {
            future::ready(match frame {
                Ok(Message::Text(text)) => Some(Ok(text)),
                Ok(_) => None,
                Err(e) => Some(Err(e)),
            })
        });
    let writer = sink.with(|text: String| future::ready(Ok::<_, axum::Error>(Message::Text(text))));

    session.run(Box::pin(reader), Box::pin(writer)).await;
}
