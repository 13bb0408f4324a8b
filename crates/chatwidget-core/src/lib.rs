//! Conversation core for the chat widget.
//!
//! Provides the pieces a presentation layer drives:
//! - `Session`: identity, visitor info, and the append-only message log
//! - `Transport`: relay to the remote agent (`RestTransport` over HTTP)
//! - `InactivityMonitor`: idle warning and automatic termination
//! - `ChatWidget`: the controller tying them together behind `ChatHandler`

pub mod inactivity;
pub mod session;
pub mod settings;
pub mod transport;
pub mod widget;

use async_trait::async_trait;
use chatwidget_common::{SessionId, UserInfo, ValidationError, WidgetError};

pub use inactivity::{InactivityMonitor, ScheduledTask, Ticket, TimerKind};
pub use session::{Phase, Session};
pub use settings::WidgetSettings;
pub use transport::{EndOfConversation, RestTransport, END_CONVERSATION_COMMAND};
pub use widget::{ChatHandler, ChatWidget, Delivery};

/// Relay between the widget and the remote conversational agent.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one visitor turn and return the agent's textual replies in order.
    async fn send_message(
        &self,
        sender: &SessionId,
        text: &str,
        user_info: Option<&UserInfo>,
    ) -> Result<Vec<AgentReply>, TransportError>;

    /// Best-effort notification that the conversation is over.
    async fn send_end_of_conversation(
        &self,
        report: &EndOfConversation,
    ) -> Result<(), TransportError>;
}

/// One textual reply from the agent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AgentReply {
    pub text: String,
}

impl AgentReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("request timed out")]
    Timeout,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("visitor has not identified yet")]
    NotIdentified,
    #[error("visitor is already identified")]
    AlreadyIdentified,
    #[error("session has ended")]
    Ended,
    #[error("a message is already being sent")]
    Busy,
}

impl From<TransportError> for WidgetError {
    fn from(e: TransportError) -> Self {
        WidgetError::Transport(e.to_string())
    }
}

impl From<SessionError> for WidgetError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Validation(v) => WidgetError::Validation(v),
            other => WidgetError::Session(other.to_string()),
        }
    }
}
