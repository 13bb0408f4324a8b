//! Widget controller: owns the session, its inactivity monitor, and the
//! transport, and turns visitor actions into session changes and events.

mod busy;
mod flows;
mod handler;


pub use handler::ChatHandler;

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Weak};

use chatwidget_common::{ChatMessage, EventBus, SessionId, UserInfo, WidgetEvent};
use tokio::sync::{broadcast, Mutex};

use self::busy::SendSlot;
use crate::inactivity::{InactivityMonitor, ScheduledTask, Ticket, TimerKind};
use crate::session::{Phase, Session};
use crate::settings::WidgetSettings;
use crate::Transport;

/// How a send was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Blank input; nothing was sent.
    Ignored,
    /// This many agent replies were appended.
    Replies(usize),
    /// The agent had nothing to say; the fallback was appended.
    Fallback,
    /// The call failed; the apology was appended.
    Apology,
}

/// One embeddable chat widget instance.
///
/// Cheap to clone; clones share the same session. Independent instances
/// share nothing.
#[derive(Clone)]
pub struct ChatWidget {
    inner: Arc<Inner>,
}

pub(crate) struct Inner {
    settings: WidgetSettings,
    transport: Arc<dyn Transport>,
    events: EventBus,
    state: Mutex<State>,
}

/// Everything mutated by visitor actions and timers, serialized by one lock.
struct State {
    session: Session,
    monitor: InactivityMonitor,
    /// Badge, suggestions, and restart-offer timers.
    extras: Vec<ScheduledTask>,
    /// Replaced on restart along with the session.
    send_slot: Arc<SendSlot>,
}

impl State {
    fn track(&mut self, task: ScheduledTask) {
        self.extras.retain(|t| !t.is_finished());
        self.extras.push(task);
    }
}

impl ChatWidget {
    pub fn new(settings: WidgetSettings, transport: Arc<dyn Transport>) -> Self {
        Self::with_event_bus(settings, transport, EventBus::default())
    }

    pub fn with_event_bus(
        settings: WidgetSettings,
        transport: Arc<dyn Transport>,
        events: EventBus,
    ) -> Self {
        let monitor = InactivityMonitor::new(settings.warn_after, settings.terminate_after);
        Self {
            inner: Arc::new(Inner {
                settings,
                transport,
                events,
                state: Mutex::new(State {
                    session: Session::new(),
                    monitor,
                    extras: Vec::new(),
                    send_slot: Arc::default(),
                }),
            }),
        }
    }

    /// Arm the unread badge. Call once the widget is on screen.
    pub async fn start(&self) {
        self.inner.arm_badge().await;
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WidgetEvent> {
        self.inner.events.subscribe()
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.inner.settings
    }

    pub async fn session_id(&self) -> SessionId {
        self.inner.state.lock().await.session.id().clone()
    }

    pub async fn phase(&self) -> Phase {
        self.inner.state.lock().await.session.phase()
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.inner.state.lock().await.session.messages().to_vec()
    }

    pub async fn user_info(&self) -> Option<UserInfo> {
        self.inner.state.lock().await.session.user_info().cloned()
    }

    pub async fn is_open(&self) -> bool {
        self.inner.state.lock().await.session.is_open()
    }

    /// Kind of the armed inactivity action, if any.
    pub async fn pending_timer(&self) -> Option<TimerKind> {
        self.inner.state.lock().await.monitor.pending()
    }
}

/// Entry point of every inactivity timer. Boxed because `on_timer` re-arms
/// the monitor with this same function.
fn fire(weak: Weak<Inner>, ticket: Ticket) -> Pin<Box<dyn Future<Output = ()> + Send>> {
    Box::pin(async move {
        if let Some(inner) = weak.upgrade() {
            inner.on_timer(ticket).await;
        }
    })
}
