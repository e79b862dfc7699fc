//! # Jobseek Realtime
//!
//! Live delivery for chat messages.
//!
//! [`ConnectionHub`] maps each online user to exactly one connection and its
//! bounded outbound queue. Delivery never waits: a full queue gets its
//! connection evicted and an absent user is simply offline.
//!
//! [`ClientSession`] drives one connection. It reads inbound frames, stores
//! them through the chat service, and forwards each stored message to the
//! receiver through the hub while a second task drains the connection's own
//! queue onto the transport.

pub mod frame;
pub mod hub;
pub mod metrics;
pub mod session;

pub use frame::{InboundFrame, OutboundFrame};
pub use hub::{ConnectionHandle, ConnectionHub, DeliveryOutcome, Registration};
pub use session::ClientSession;
