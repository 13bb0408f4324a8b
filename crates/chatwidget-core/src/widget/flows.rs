//! Visitor and timer flows. Session mutations happen under the state lock;
//! the lock is released before any network call.

use std::sync::Arc;

use chatwidget_common::{Author, SessionId, WidgetEvent};
use tracing::{debug, info, warn};

use crate::inactivity::{ScheduledTask, Ticket, TimerKind};
use crate::session::{Phase, Session};
use crate::transport::EndOfConversation;
use crate::{AgentReply, SessionError};

use super::busy::BusyGuard;
use super::{fire, Delivery, Inner, State};

impl Inner {
    /// Record a message and announce it.
    fn push(
        &self,
        state: &mut State,
        text: impl Into<String>,
        author: Author,
    ) -> Result<(), SessionError> {
        let message = state.session.record_message(text, author)?.clone();
        self.events.publish(WidgetEvent::MessageAppended(message));
        Ok(())
    }

    /// Restart the idle countdown.
    fn arm_warning(self: &Arc<Self>, state: &mut State) {
        let weak = Arc::downgrade(self);
        state
            .monitor
            .reset_on_activity(move |ticket| fire(weak, ticket));
    }

    pub(super) async fn arm_badge(self: &Arc<Self>) {
        let weak = Arc::downgrade(self);
        let task = ScheduledTask::spawn(self.settings.badge_delay, async move {
            if let Some(inner) = weak.upgrade() {
                let state = inner.state.lock().await;
                if !state.session.is_open() {
                    inner.events.publish(WidgetEvent::BadgeShown);
                }
            }
        });
        self.state.lock().await.track(task);
    }

    pub(super) async fn toggle(&self) -> bool {
        let mut state = self.state.lock().await;
        let open = !state.session.is_open();
        state.session.set_open(open);
        self.events.publish(if open {
            WidgetEvent::PanelOpened
        } else {
            WidgetEvent::PanelClosed
        });
        open
    }

    pub(super) async fn identify(
        self: &Arc<Self>,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<(), SessionError> {
        let name = {
            let mut state = self.state.lock().await;
            let name = match state.session.identify(name, phone, email) {
                Ok(info) => info.name.clone(),
                Err(SessionError::Validation(e)) => {
                    self.events.publish(WidgetEvent::ValidationFailed {
                        prompt: self.settings.name_required.clone(),
                    });
                    return Err(e.into());
                }
                Err(e) => return Err(e),
            };
            let session_id = state.session.id().clone();
            info!(%session_id, "Conversation started");

            self.push(&mut state, self.settings.render_greeting(&name), Author::Bot)?;
            self.arm_warning(&mut state);

            if !self.settings.suggestions.is_empty() {
                let weak = Arc::downgrade(self);
                let task = ScheduledTask::spawn(self.settings.suggestions_delay, async move {
                    if let Some(inner) = weak.upgrade() {
                        inner.post_suggestions(&session_id).await;
                    }
                });
                state.track(task);
            }
            name
        };

        if self.settings.introduce_to_agent {
            let text = self.settings.render_introduction(&name);
            if let Err(e) = self.send(&text).await {
                warn!(error = %e, "Introduction not relayed");
            }
        }
        Ok(())
    }

    async fn post_suggestions(&self, session_id: &SessionId) {
        let mut state = self.state.lock().await;
        if state.session.id() != session_id || !state.session.is_chatting() {
            return;
        }
        let text = self.settings.suggestions.clone();
        if let Err(e) = self.push(&mut state, text, Author::Bot) {
            debug!(error = %e, "Suggestions not posted");
        }
    }

    pub(super) async fn activity(self: &Arc<Self>) {
        let mut state = self.state.lock().await;
        if !state.session.is_chatting() {
            return;
        }
        if state.session.touch().is_ok() {
            self.arm_warning(&mut state);
        }
    }

    pub(super) async fn send(self: &Arc<Self>, text: &str) -> Result<Delivery, SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Delivery::Ignored);
        }

        let (_busy, session_id, user_info) = {
            let mut state = self.state.lock().await;
            let busy = BusyGuard::acquire(state.send_slot.clone(), &self.events)?;
            self.push(&mut state, text, Author::User)?;
            self.arm_warning(&mut state);
            (
                busy,
                state.session.id().clone(),
                state.session.user_info().cloned(),
            )
        };

        self.events.publish(WidgetEvent::TypingStarted);
        let result = self
            .transport
            .send_message(&session_id, text, user_info.as_ref())
            .await;
        self.events.publish(WidgetEvent::TypingStopped);

        match result {
            Ok(replies) if replies.is_empty() => {
                let fallback = self.settings.fallback.clone();
                self.deliver(&session_id, fallback).await;
                Ok(Delivery::Fallback)
            }
            Ok(replies) => Ok(Delivery::Replies(
                self.deliver_replies(&session_id, replies).await,
            )),
            Err(e) => {
                warn!(%session_id, error = %e, "Agent request failed");
                let apology = self.settings.transport_error.clone();
                self.deliver(&session_id, apology).await;
                Ok(Delivery::Apology)
            }
        }
    }

    /// Append replies in order, pausing between them. Returns how many were
    /// appended.
    async fn deliver_replies(&self, session_id: &SessionId, replies: Vec<AgentReply>) -> usize {
        let mut delivered = 0;
        for (i, reply) in replies.into_iter().enumerate() {
            if i > 0 && !self.settings.reply_delay.is_zero() {
                tokio::time::sleep(self.settings.reply_delay).await;
            }
            if !self.deliver(session_id, reply.text).await {
                break;
            }
            delivered += 1;
        }
        delivered
    }

    /// Append a bot message unless the session it answers has ended or been
    /// replaced.
    async fn deliver(&self, session_id: &SessionId, text: String) -> bool {
        let mut state = self.state.lock().await;
        if state.session.id() != session_id || state.session.ended() {
            debug!(%session_id, "Dropping late reply");
            return false;
        }
        self.push(&mut state, text, Author::Bot).is_ok()
    }

    pub(super) async fn end(self: &Arc<Self>, auto: bool) -> Result<(), SessionError> {
        let report = {
            let mut state = self.state.lock().await;
            match state.session.phase() {
                Phase::Anonymous => return Err(SessionError::NotIdentified),
                Phase::Ended => return Ok(()),
                _ => {}
            }
            self.end_locked(&mut state, auto)?
        };
        self.notify_end(&report).await;
        Ok(())
    }

    /// Farewell, commit `Ended`, stop the monitor, offer a restart. The caller
    /// sends the returned report once the lock is released.
    fn end_locked(
        self: &Arc<Self>,
        state: &mut State,
        auto: bool,
    ) -> Result<EndOfConversation, SessionError> {
        let farewell = if auto {
            self.settings.auto_farewell.clone()
        } else {
            self.settings.farewell.clone()
        };
        self.push(state, farewell, Author::Bot)?;
        state.session.mark_ended();
        state.monitor.cancel();
        let report = state.session.end_report(auto);

        let weak = Arc::downgrade(self);
        let task = ScheduledTask::spawn(self.settings.restart_offer_delay, async move {
            if let Some(inner) = weak.upgrade() {
                inner.events.publish(WidgetEvent::RestartOffered);
            }
        });
        state.track(task);

        info!(
            session_id = %report.session_id,
            auto,
            messages = report.total_messages(),
            "Conversation ended"
        );
        self.events.publish(WidgetEvent::SessionEnded { auto });
        Ok(report)
    }

    /// Best-effort: failures are logged, the session stays ended.
    async fn notify_end(&self, report: &EndOfConversation) {
        if let Err(e) = self.transport.send_end_of_conversation(report).await {
            warn!(
                session_id = %report.session_id,
                error = %e,
                "End-of-conversation report not delivered"
            );
        }
    }

    /// Fresh session, as on a page load: timers and any in-flight send of
    /// the old session are dropped and the unread badge is re-armed.
    pub(super) async fn restart(self: &Arc<Self>) -> SessionId {
        let session_id = {
            let mut state = self.state.lock().await;
            state.monitor.cancel();
            state.extras.clear();
            state.send_slot.retire(&self.events);
            state.send_slot = Arc::default();
            state.session = Session::new();
            state.session.id().clone()
        };
        info!(%session_id, "Session restarted");
        self.events.publish(WidgetEvent::SessionRestarted {
            session_id: session_id.clone(),
        });
        self.arm_badge().await;
        session_id
    }

    pub(super) async fn on_timer(self: &Arc<Self>, ticket: Ticket) {
        let mut state = self.state.lock().await;
        if !state.monitor.claim(ticket) {
            debug!(?ticket, "Stale inactivity timer");
            return;
        }

        match ticket.kind {
            TimerKind::Warn => {
                if !state.session.mark_warned() {
                    return;
                }
                debug!(session_id = %state.session.id(), "Visitor idle, warning");
                let warning = self.settings.render_warning();
                if let Err(e) = self.push(&mut state, warning, Author::Bot) {
                    debug!(error = %e, "Warning not posted");
                    return;
                }
                self.events.publish(WidgetEvent::InactivityWarning);
                let weak = Arc::downgrade(self);
                state
                    .monitor
                    .schedule_termination(move |ticket| fire(weak, ticket));
            }
            TimerKind::Terminate => {
                if state.session.phase() != Phase::Warned {
                    return;
                }
                let report = match self.end_locked(&mut state, true) {
                    Ok(report) => report,
                    Err(e) => {
                        debug!(error = %e, "Automatic termination skipped");
                        return;
                    }
                };
                drop(state);
                self.notify_end(&report).await;
            }
        }
    }
}
