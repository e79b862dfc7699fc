//! Registry of live connections.
//!
//! Every online user owns at most one slot. Registering again for the same
//! user drops the previous connection before the new one is installed.
//! Dropping a connection closes its queue and cancels its `dropped` token, so
//! a session stuck writing to a stalled transport still ends. The table lives
//! behind a single mutex and no lock is held across an await point.

use crate::frame::OutboundFrame;
use crate::metrics::HubMetrics;
use jobseek_config::HubConfig;
use jobseek_core::{ConnectionId, JobseekResult, UserId};
use parking_lot::Mutex;
use std::collections::HashMap;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Copyable reference to a registered connection.
///
/// Sessions hold this instead of anything borrowed from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionHandle {
    pub user_id: UserId,
    pub connection_id: ConnectionId,
}

/// A fresh registration: the handle plus the consumer end of the
/// connection's outbound queue.
#[derive(Debug)]
pub struct Registration {
    pub handle: ConnectionHandle,
    pub outbound: mpsc::Receiver<String>,
    /// Cancelled when the hub evicts or supersedes this connection.
    /// A plain `unregister` leaves it untouched.
    pub dropped: CancellationToken,
}

/// Result of a delivery attempt. Delivery never fails the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The payload was queued for the target's connection.
    Delivered,
    /// The target has no live connection.
    Offline,
    /// The target's queue was full or closed and its connection was dropped.
    Evicted,
}

#[derive(Debug)]
struct Connection {
    connection_id: ConnectionId,
    sender: mpsc::Sender<String>,
    dropped: CancellationToken,
}

/// Maps online users to their single live connection.
#[derive(Debug)]
pub struct ConnectionHub {
    connections: Mutex<HashMap<UserId, Connection>>,
    queue_capacity: usize,
}

impl ConnectionHub {
    /// Creates a hub whose connections buffer up to `queue_capacity` frames.
    #[must_use]
    pub fn new(queue_capacity: usize) -> Self {
        Self {
            connections: Mutex::new(HashMap::new()),
            queue_capacity: queue_capacity.max(1),
        }
    }

    #[must_use]
    pub fn from_config(config: &HubConfig) -> Self {
        Self::new(config.outbound_queue_capacity)
    }

    /// Registers a new connection for `user_id`, replacing any existing one.
    ///
    /// The replaced entry's queue is closed and its `dropped` token is
    /// cancelled, which ends the old session.
    pub fn register(&self, user_id: UserId) -> Registration {
        let (sender, outbound) = mpsc::channel(self.queue_capacity);
        let connection_id = ConnectionId::new();
        let dropped = CancellationToken::new();

        let (previous, online) = {
            let mut connections = self.connections.lock();
            let previous = connections.insert(
                user_id,
                Connection {
                    connection_id,
                    sender,
                    dropped: dropped.clone(),
                },
            );
            (previous, connections.len())
        };

        if let Some(previous) = &previous {
            previous.dropped.cancel();
            info!(
                user_id = %user_id,
                connection_id = %previous.connection_id,
                "Connection superseded"
            );
        }
        info!(user_id = %user_id, connection_id = %connection_id, "Connected");
        HubMetrics::connection_registered(previous.is_some());
        HubMetrics::update_online(online);

        Registration {
            handle: ConnectionHandle {
                user_id,
                connection_id,
            },
            outbound,
            dropped,
        }
    }

    /// Removes the connection if the slot still belongs to it.
    ///
    /// Returns false when the slot is empty or was taken over by a newer
    /// connection, which is left untouched.
    pub fn unregister(&self, handle: ConnectionHandle) -> bool {
        let (removed, online) = {
            let mut connections = self.connections.lock();
            let owned = connections
                .get(&handle.user_id)
                .is_some_and(|c| c.connection_id == handle.connection_id);
            let removed = owned && connections.remove(&handle.user_id).is_some();
            (removed, connections.len())
        };

        if removed {
            info!(
                user_id = %handle.user_id,
                connection_id = %handle.connection_id,
                "Disconnected"
            );
            HubMetrics::connection_unregistered();
            HubMetrics::update_online(online);
        }
        removed
    }

    /// Queues `payload` for the target's connection without waiting.
    pub fn deliver(&self, target: UserId, payload: String) -> DeliveryOutcome {
        let mut connections = self.connections.lock();
        let Some(connection) = connections.get(&target) else {
            drop(connections);
            debug!(user_id = %target, "Receiver offline, frame not pushed");
            HubMetrics::frame_offline();
            return DeliveryOutcome::Offline;
        };

        let result = connection.sender.try_send(payload);
        let reason = match result {
            Ok(()) => {
                drop(connections);
                HubMetrics::frame_delivered();
                return DeliveryOutcome::Delivered;
            }
            Err(TrySendError::Full(_)) => "queue_full",
            Err(TrySendError::Closed(_)) => "queue_closed",
        };

        let evicted = connections.remove(&target);
        let online = connections.len();
        drop(connections);

        if let Some(evicted) = evicted {
            evicted.dropped.cancel();
            warn!(
                user_id = %target,
                connection_id = %evicted.connection_id,
                reason,
                "Evicting slow connection"
            );
        }
        HubMetrics::connection_evicted(reason);
        HubMetrics::update_online(online);
        DeliveryOutcome::Evicted
    }

    /// Serializes `frame` and delivers it to `target`.
    pub fn deliver_frame(
        &self,
        target: UserId,
        frame: &OutboundFrame,
    ) -> JobseekResult<DeliveryOutcome> {
        let payload = frame.to_payload()?;
        Ok(self.deliver(target, payload))
    }

    #[must_use]
    pub fn is_online(&self, user_id: UserId) -> bool {
        self.connections.lock().contains_key(&user_id)
    }

    #[must_use]
    pub fn online_count(&self) -> usize {
        self.connections.lock().len()
    }
}

impl Default for ConnectionHub {
    fn default() -> Self {
        Self::from_config(&HubConfig::default())
    }
}
