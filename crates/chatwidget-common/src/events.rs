use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::SessionId;
use crate::types::ChatMessage;

/// Everything a presentation layer needs to re-render the widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum WidgetEvent {
    PanelOpened,
    PanelClosed,
    /// Unread badge on the floating button.
    BadgeShown,
    MessageAppended(ChatMessage),
    TypingStarted,
    TypingStopped,
    /// The send control is disabled while a message is in flight.
    SendingChanged { busy: bool },
    ValidationFailed { prompt: String },
    InactivityWarning,
    SessionEnded { auto: bool },
    RestartOffered,
    SessionRestarted { session_id: SessionId },
    #[serde(other)]
    Unknown,
}

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<WidgetEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WidgetEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: WidgetEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Author;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(WidgetEvent::PanelOpened);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, WidgetEvent::PanelOpened));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(WidgetEvent::SessionEnded { auto: true });

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, WidgetEvent::SessionEnded { auto: true }));
        assert!(matches!(e2, WidgetEvent::SessionEnded { auto: true }));
    }

    #[tokio::test]
    async fn message_events_keep_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(WidgetEvent::TypingStarted);
        bus.publish(WidgetEvent::MessageAppended(ChatMessage::new(
            "Salut!",
            Author::Bot,
        )));
        bus.publish(WidgetEvent::TypingStopped);

        assert!(matches!(rx.recv().await.unwrap(), WidgetEvent::TypingStarted));
        let e2 = rx.recv().await.unwrap();
        assert!(
            matches!(e2, WidgetEvent::MessageAppended(ref m) if m.text == "Salut!" && m.author == Author::Bot)
        );
        assert!(matches!(rx.recv().await.unwrap(), WidgetEvent::TypingStopped));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(WidgetEvent::BadgeShown), 0);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: WidgetEvent = serde_json::from_str(json).unwrap();
        assert!(matches!(event, WidgetEvent::Unknown));
    }
}
