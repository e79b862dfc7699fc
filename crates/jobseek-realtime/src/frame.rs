//! Wire frames exchanged over a live connection.

use jobseek_core::{ChatMessage, Notification, UserId};
use serde::{Deserialize, Serialize};

/// A chat message submitted by the client.
///
/// `sender_id` must match the authenticated user of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundFrame {
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub message: String,
}

/// A frame pushed to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundFrame {
    /// A stored chat message addressed to the client.
    Message(ChatMessage),
    /// A new notification for the client.
    Notification { notification: Notification },
}

impl OutboundFrame {
    /// Serializes the frame into a text payload.
    pub fn to_payload(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<ChatMessage> for OutboundFrame {
    fn from(message: ChatMessage) -> Self {
        Self::Message(message)
    }
}

impl From<Notification> for OutboundFrame {
    fn from(notification: Notification) -> Self {
        Self::Notification { notification }
    }
}
