//! Prometheus metrics for the connection hub.

use metrics::{counter, describe_counter, describe_gauge, gauge};

/// Metric names for the connection hub.
pub mod names {
    /// Connections registered.
    pub const CONNECTIONS_REGISTERED_TOTAL: &str = "jobseek_hub_connections_registered_total";
    /// Connections replaced by a newer connection of the same user.
    pub const CONNECTIONS_SUPERSEDED_TOTAL: &str = "jobseek_hub_connections_superseded_total";
    /// Connections dropped because their outbound queue was full or closed.
    pub const CONNECTIONS_EVICTED_TOTAL: &str = "jobseek_hub_connections_evicted_total";
    /// Connections removed on session teardown.
    pub const CONNECTIONS_UNREGISTERED_TOTAL: &str = "jobseek_hub_connections_unregistered_total";
    /// Frames queued for a live connection.
    pub const FRAMES_DELIVERED_TOTAL: &str = "jobseek_hub_frames_delivered_total";
    /// Frames addressed to a user with no live connection.
    pub const FRAMES_OFFLINE_TOTAL: &str = "jobseek_hub_frames_offline_total";
    /// Inbound frames discarded by a session.
    pub const INBOUND_FRAMES_REJECTED_TOTAL: &str = "jobseek_hub_inbound_frames_rejected_total";

    /// Current live connections.
    pub const CONNECTIONS_ONLINE: &str = "jobseek_hub_connections_online";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        names::CONNECTIONS_REGISTERED_TOTAL,
        "Total number of live connections registered"
    );
    describe_counter!(
        names::CONNECTIONS_SUPERSEDED_TOTAL,
        "Total number of connections replaced by a newer one for the same user"
    );
    describe_counter!(
        names::CONNECTIONS_EVICTED_TOTAL,
        "Total number of connections evicted by the hub"
    );
    describe_counter!(
        names::CONNECTIONS_UNREGISTERED_TOTAL,
        "Total number of connections removed on disconnect"
    );
    describe_counter!(
        names::FRAMES_DELIVERED_TOTAL,
        "Total number of frames queued for live delivery"
    );
    describe_counter!(
        names::FRAMES_OFFLINE_TOTAL,
        "Total number of frames addressed to offline users"
    );
    describe_counter!(
        names::INBOUND_FRAMES_REJECTED_TOTAL,
        "Total number of inbound frames discarded"
    );

    describe_gauge!(
        names::CONNECTIONS_ONLINE,
        "Current number of live connections"
    );
}

/// Hub metrics recorder.
#[derive(Clone)]
pub struct HubMetrics;

impl HubMetrics {
    /// Record a connection registered.
    pub fn connection_registered(superseded: bool) {
        counter!(names::CONNECTIONS_REGISTERED_TOTAL).increment(1);
        if superseded {
            counter!(names::CONNECTIONS_SUPERSEDED_TOTAL).increment(1);
        }
    }

    /// Record a connection evicted.
    pub fn connection_evicted(reason: &'static str) {
        counter!(names::CONNECTIONS_EVICTED_TOTAL, "reason" => reason).increment(1);
    }

    /// Record a connection unregistered.
    pub fn connection_unregistered() {
        counter!(names::CONNECTIONS_UNREGISTERED_TOTAL).increment(1);
    }

    /// Record a frame queued for delivery.
    pub fn frame_delivered() {
        counter!(names::FRAMES_DELIVERED_TOTAL).increment(1);
    }

    /// Record a frame for an offline user.
    pub fn frame_offline() {
        counter!(names::FRAMES_OFFLINE_TOTAL).increment(1);
    }

    /// Record a discarded inbound frame.
    pub fn inbound_rejected(reason: &'static str) {
        counter!(names::INBOUND_FRAMES_REJECTED_TOTAL, "reason" => reason).increment(1);
    }

    /// Update the live connection count.
    #[allow(clippy::cast_precision_loss)]
    pub fn update_online(count: usize) {
        gauge!(names::CONNECTIONS_ONLINE).set(count as f64);
    }
}
