//! Wire envelopes for the webhook endpoint.

use chatwidget_common::{ChatMessage, SessionId, UserInfo};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Reserved `message` value marking the end-of-conversation report.
pub const END_CONVERSATION_COMMAND: &str = "/end_conversation";

/// `{sender, message, metadata}` body accepted by the REST channel.
#[derive(Debug, Serialize)]
pub(crate) struct WebhookRequest<'a, M: Serialize> {
    pub sender: &'a str,
    pub message: &'a str,
    pub metadata: Option<M>,
}

/// Everything the backend receives when a conversation ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndOfConversation {
    pub session_id: SessionId,
    pub user_info: Option<UserInfo>,
    pub messages: Vec<ChatMessage>,
    pub ended_at: DateTime<Utc>,
    /// `true` when the inactivity monitor ended the session.
    pub auto_ended: bool,
}

impl EndOfConversation {
    pub fn total_messages(&self) -> usize {
        self.messages.len()
    }
}

/// Metadata object carried by the end-of-conversation request.
#[derive(Debug, Serialize)]
pub(crate) struct EndMetadata<'a> {
    pub messages: &'a [ChatMessage],
    pub user_info: Option<&'a UserInfo>,
    pub session_id: &'a SessionId,
    pub ended_at: DateTime<Utc>,
    pub total_messages: usize,
    pub auto_ended: bool,
}

impl<'a> From<&'a EndOfConversation> for EndMetadata<'a> {
    fn from(report: &'a EndOfConversation) -> Self {
        Self {
            messages: &report.messages,
            user_info: report.user_info.as_ref(),
            session_id: &report.session_id,
            ended_at: report.ended_at,
            total_messages: report.total_messages(),
            auto_ended: report.auto_ended,
        }
    }
}
