//! One live connection.
//!
//! A session runs two loops. The inbound loop reads frames, stores them
//! through [`ChatService`] and pushes each stored message to its receiver.
//! The outbound loop drains the session's queue onto the transport. Either
//! loop ending tears the whole session down, and so does the hub dropping the
//! connection, even while a write is stuck on a stalled transport.

use crate::frame::{InboundFrame, OutboundFrame};
use crate::hub::{ConnectionHandle, ConnectionHub, Registration};
use crate::metrics::HubMetrics;
use futures::{Sink, SinkExt, Stream, StreamExt};
use jobseek_core::UserId;
use jobseek_service::ChatService;
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

/// Drives a single authenticated connection.
pub struct ClientSession {
    hub: Arc<ConnectionHub>,
    chat_service: Arc<dyn ChatService>,
    user_id: UserId,
}

impl ClientSession {
    #[must_use]
    pub fn new(hub: Arc<ConnectionHub>, chat_service: Arc<dyn ChatService>, user_id: UserId) -> Self {
        Self {
            hub,
            chat_service,
            user_id,
        }
    }

    /// Registers the connection and runs it until the transport closes,
    /// fails, or the hub drops the connection.
    ///
    /// `reader` yields inbound text frames; `writer` accepts outbound ones.
    pub async fn run<R, RE, W>(self, reader: R, writer: W)
    where
        R: Stream<Item = Result<String, RE>> + Unpin + Send,
        RE: Display,
        W: Sink<String> + Unpin + Send + 'static,
        W::Error: Display,
    {
        let Registration {
            handle,
            outbound,
            dropped,
        } = self.hub.register(self.user_id);
        let cancel = dropped.child_token();

        let writer_task = tokio::spawn(write_loop(
            handle,
            writer,
            outbound,
            cancel.clone(),
            dropped,
        ));

        self.read_loop(handle, reader, &cancel).await;

        cancel.cancel();
        self.hub.unregister(handle);
        if let Err(e) = writer_task.await {
            error!(connection_id = %handle.connection_id, "Outbound task failed: {}", e);
        }
        debug!(
            user_id = %handle.user_id,
            connection_id = %handle.connection_id,
            "Session closed"
        );
    }

    async fn read_loop<R, RE>(&self, handle: ConnectionHandle, mut reader: R, cancel: &CancellationToken)
    where
        R: Stream<Item = Result<String, RE>> + Unpin + Send,
        RE: Display,
    {
        loop {
            let next = tokio::select! {
                () = cancel.cancelled() => break,
                next = reader.next() => next,
            };

            match next {
                Some(Ok(text)) => self.handle_frame(handle, &text).await,
                Some(Err(e)) => {
                    debug!(connection_id = %handle.connection_id, "Read failed: {}", e);
                    break;
                }
                None => break,
            }
        }
    }

    async fn handle_frame(&self, handle: ConnectionHandle, text: &str) {
        let frame: InboundFrame = match serde_json::from_str(text) {
            Ok(frame) => frame,
            Err(e) => {
                warn!(
                    user_id = %handle.user_id,
                    connection_id = %handle.connection_id,
                    error = %e,
                    "Discarding malformed frame"
                );
                HubMetrics::inbound_rejected("malformed");
                return;
            }
        };

        if frame.sender_id != handle.user_id {
            warn!(
                user_id = %handle.user_id,
                claimed_sender = %frame.sender_id,
                "Discarding frame with mismatched sender"
            );
            HubMetrics::inbound_rejected("sender_mismatch");
            return;
        }

        let stored = match self
            .chat_service
            .send_message(handle.user_id, frame.receiver_id, frame.message)
            .await
        {
            Ok(stored) => stored,
            Err(e) => {
                error!(
                    user_id = %handle.user_id,
                    receiver_id = %frame.receiver_id,
                    "Failed to store message: {}",
                    e
                );
                HubMetrics::inbound_rejected("store_failed");
                return;
            }
        };

        let receiver_id = stored.receiver_id;
        if let Err(e) = self
            .hub
            .deliver_frame(receiver_id, &OutboundFrame::Message(stored))
        {
            error!(receiver_id = %receiver_id, "Failed to push message: {}", e);
        }
    }
}

async fn write_loop<W>(
    handle: ConnectionHandle,
    mut writer: W,
    mut outbound: mpsc::Receiver<String>,
    cancel: CancellationToken,
    dropped: CancellationToken,
) where
    W: Sink<String> + Unpin,
    W::Error: Display,
{
    loop {
        let payload = tokio::select! {
            () = cancel.cancelled() => break,
            payload = outbound.recv() => payload,
        };

        // None: the hub dropped this connection.
        let Some(payload) = payload else {
            debug!(connection_id = %handle.connection_id, "Outbound queue closed");
            break;
        };

        let result = tokio::select! {
            () = cancel.cancelled() => break,
            result = writer.send(payload) => result,
        };
        if let Err(e) = result {
            debug!(connection_id = %handle.connection_id, "Write failed: {}", e);
            break;
        }
    }

    cancel.cancel();

    // The transport of a dropped connection may be stalled; release it unclosed.
    if dropped.is_cancelled() {
        debug!(connection_id = %handle.connection_id, "Connection dropped by hub");
        return;
    }
    tokio::select! {
        () = dropped.cancelled() => {
            debug!(connection_id = %handle.connection_id, "Connection dropped while closing");
        }
        result = writer.close() => {
            if let Err(e) = result {
                debug!(connection_id = %handle.connection_id, "Close failed: {}", e);
            }
        }
    }
}
