//! Chat DTOs.

use jobseek_core::rules::not_blank;
use jobseek_core::{MessageFilter, UserId};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request to send a chat message.
///
/// The sender is always the authenticated caller, so it is not part of the body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    #[validate(range(min = 1, message = "Receiver is required"))]
    pub receiver_id: u64,

    #[validate(custom(function = not_blank, message = "Message must not be blank"))]
    pub message: String,
}

impl SendMessageRequest {
    #[must_use]
    pub const fn receiver(&self) -> UserId {
        UserId(self.receiver_id)
    }
}

/// Optional filters for listing messages.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MessageQuery {
    /// Only messages sent by this user.
    pub sender_id: Option<u64>,
    /// Only messages received by this user.
    pub receiver_id: Option<u64>,
}

impl From<MessageQuery> for MessageFilter {
    fn from(query: MessageQuery) -> Self {
        Self {
            sender_id: query.sender_id.map(UserId),
            receiver_id: query.receiver_id.map(UserId),
        }
    }
}
