//! Chat message entity.

use crate::{MessageId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted chat message.
///
/// Messages are immutable once stored. The wire name of the body is
/// `message`, matching the JSON clients already speak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    #[serde(rename = "message")]
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A message that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChatMessage {
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub body: String,
}

impl NewChatMessage {
    #[must_use]
    pub fn new(sender_id: UserId, receiver_id: UserId, body: impl Into<String>) -> Self {
        Self {
            sender_id,
            receiver_id,
            body: body.into(),
        }
    }
}

/// Optional sender/receiver filters for message queries.
///
/// Each filter applies on its own; an empty filter matches every message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageFilter {
    pub sender_id: Option<UserId>,
    pub receiver_id: Option<UserId>,
}

impl MessageFilter {
    /// Filter for the messages one user sent to another.
    #[must_use]
    pub const fn between(sender_id: UserId, receiver_id: UserId) -> Self {
        Self {
            sender_id: Some(sender_id),
            receiver_id: Some(receiver_id),
        }
    }

    /// Returns true if `message` passes every filter that is set.
    #[must_use]
    pub fn matches(&self, message: &ChatMessage) -> bool {
        self.sender_id.map_or(true, |id| id == message.sender_id)
            && self.receiver_id.map_or(true, |id| id == message.receiver_id)
    }

    /// Returns true if `user_id` is named by one of the filters.
    #[must_use]
    pub fn involves(&self, user_id: UserId) -> bool {
        self.sender_id == Some(user_id) || self.receiver_id == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(sender: u64, receiver: u64) -> ChatMessage {
        ChatMessage {
            id: MessageId(1),
            sender_id: UserId(sender),
            receiver_id: UserId(receiver),
            body: "hi".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_body_uses_message_on_the_wire() {
        let json = serde_json::to_value(message(1, 2)).unwrap();
        assert_eq!(json["message"], "hi");
        assert_eq!(json["sender_id"], 1);
        assert_eq!(json["receiver_id"], 2);
        assert!(json.get("body").is_none());
    }

    #[test]
    fn test_filters_apply_independently() {
        let m = message(1, 2);
        assert!(MessageFilter::default().matches(&m));
        assert!(MessageFilter::between(UserId(1), UserId(2)).matches(&m));
        assert!(!MessageFilter::between(UserId(2), UserId(1)).matches(&m));

        let only_sender = MessageFilter {
            sender_id: Some(UserId(1)),
            receiver_id: None,
        };
        assert!(only_sender.matches(&m));

        let only_receiver = MessageFilter {
            sender_id: None,
            receiver_id: Some(UserId(3)),
        };
        assert!(!only_receiver.matches(&m));
    }

    #[test]
    fn test_involves() {
        let filter = MessageFilter {
            sender_id: None,
            receiver_id: Some(UserId(5)),
        };
        assert!(filter.involves(UserId(5)));
        assert!(!filter.involves(UserId(1)));
        assert!(!MessageFilter::default().involves(UserId(1)));
    }
}
