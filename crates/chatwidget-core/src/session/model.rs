//! Session struct, phase enum, and read accessors.

use chatwidget_common::{ChatMessage, SessionId, UserInfo};
use tokio::time::Instant;

/// Lifecycle phase.
///
/// `Anonymous → Identified → Active ⇄ Warned → Ended`. `Ended` is terminal;
/// only replacing the session leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Anonymous,
    Identified,
    Active,
    Warned,
    Ended,
}

/// One visitor's conversation, from widget load to termination.
#[derive(Debug)]
pub struct Session {
    pub(super) id: SessionId,
    pub(super) user_info: Option<UserInfo>,
    pub(super) messages: Vec<ChatMessage>,
    pub(super) last_activity: Instant,
    pub(super) open: bool,
    pub(super) phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            user_info: None,
            messages: Vec::new(),
            last_activity: Instant::now(),
            open: false,
            phase: Phase::Anonymous,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        self.user_info.as_ref()
    }

    /// Full message log, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ended(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Whether the visitor can currently exchange messages.
    pub fn is_chatting(&self) -> bool {
        matches!(
            self.phase,
            Phase::Identified | Phase::Active | Phase::Warned
        )
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Record panel visibility. Returns `true` if it changed.
    pub fn set_open(&mut self, open: bool) -> bool {
        let changed = self.open != open;
        self.open = open;
        changed
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
