//! Phase transitions and log mutation.

use chatwidget_common::{Author, ChatMessage, UserInfo};
use chrono::Utc;
use tokio::time::Instant;
use tracing::debug;

use crate::transport::EndOfConversation;
use crate::SessionError;

use super::model::{Phase, Session};

impl Session {
    /// Attach the visitor's contact details.
    ///
    /// Fails with a validation error when the trimmed name is empty, leaving
    /// the session anonymous. Contact details are set at most once.
    pub fn identify(
        &mut self,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<&UserInfo, SessionError> {
        match self.phase {
            Phase::Anonymous => {}
            Phase::Ended => return Err(SessionError::Ended),
            _ => return Err(SessionError::AlreadyIdentified),
        }

        let info = UserInfo::new(name, phone, email)?;
        debug!(session_id = %self.id, name = %info.name, "Visitor identified");
        self.phase = Phase::Identified;
        self.last_activity = Instant::now();
        Ok(self.user_info.insert(info))
    }

    /// Append a message stamped with the current time.
    ///
    /// The first message after identification activates the conversation;
    /// a visitor message also clears a pending inactivity warning.
    pub fn record_message(
        &mut self,
        text: impl Into<String>,
        author: Author,
    ) -> Result<&ChatMessage, SessionError> {
        match self.phase {
            Phase::Anonymous => return Err(SessionError::NotIdentified),
            Phase::Ended => return Err(SessionError::Ended),
            Phase::Identified => self.phase = Phase::Active,
            Phase::Warned if author == Author::User => self.phase = Phase::Active,
            Phase::Active | Phase::Warned => {}
        }

        self.last_activity = Instant::now();
        self.messages.push(ChatMessage::new(text, author));
        let index = self.messages.len() - 1;
        Ok(&self.messages[index])
    }

    /// Record non-message visitor activity (input focus, typing).
    pub fn touch(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Anonymous => Err(SessionError::NotIdentified),
            Phase::Ended => Err(SessionError::Ended),
            Phase::Warned => {
                self.phase = Phase::Active;
                self.last_activity = Instant::now();
                Ok(())
            }
            Phase::Identified | Phase::Active => {
                self.last_activity = Instant::now();
                Ok(())
            }
        }
    }

    /// Enter the warned phase after the idle threshold. Returns `false` if
    /// the session is not in a phase that can be warned.
    pub fn mark_warned(&mut self) -> bool {
        if matches!(self.phase, Phase::Identified | Phase::Active) {
            self.phase = Phase::Warned;
            true
        } else {
            false
        }
    }

    /// End the session. Idempotent: returns `true` only for the call that
    /// performed the transition.
    pub fn mark_ended(&mut self) -> bool {
        if self.phase == Phase::Ended {
            return false;
        }
        debug!(session_id = %self.id, from = ?self.phase, "Session ended");
        self.phase = Phase::Ended;
        true
    }

    /// Snapshot of the conversation for the end-of-conversation notification.
    pub fn end_report(&self, auto_ended: bool) -> EndOfConversation {
        EndOfConversation {
            session_id: self.id.clone(),
            user_info: self.user_info.clone(),
            messages: self.messages.clone(),
            ended_at: Utc::now(),
            auto_ended,
        }
    }
}
