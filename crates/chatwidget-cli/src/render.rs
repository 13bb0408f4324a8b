//! Turns widget events into terminal output.

use chatwidget_common::{Author, ChatMessage, WidgetEvent};
use tokio::sync::broadcast;
use tracing::warn;

/// Print events until the widget is dropped.
pub async fn print_events(mut rx: broadcast::Receiver<WidgetEvent>) {
    loop {
        match rx.recv().await {
            Ok(event) => {
                if let Some(text) = render_event(&event) {
                    println!("{text}");
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(skipped, "Event printer lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

pub fn render_event(event: &WidgetEvent) -> Option<String> {
    match event {
        WidgetEvent::MessageAppended(message) => Some(format_message(message)),
        WidgetEvent::TypingStarted => Some("  … l'agent écrit".to_string()),
        WidgetEvent::BadgeShown => Some("  (1) nouveau message".to_string()),
        WidgetEvent::ValidationFailed { prompt } => Some(format!("  ! {prompt}")),
        WidgetEvent::SessionEnded { .. } => Some("  -- conversation terminée --".to_string()),
        WidgetEvent::RestartOffered => {
            Some("  Tapez /restart pour une nouvelle conversation.".to_string())
        }
        WidgetEvent::SessionRestarted { .. } => Some("  -- nouvelle conversation --".to_string()),
        _ => None,
    }
}

/// `[HH:MM] Agent: text`, continuation lines indented under the text.
pub fn format_message(message: &ChatMessage) -> String {
    let time = message
        .timestamp
        .with_timezone(&chrono::Local)
        .format("%H:%M");
    let label = match message.author {
        Author::User => "Vous",
        Author::Bot => "Agent",
    };
    let prefix = format!("[{time}] {label}: ");
    let indent = " ".repeat(prefix.chars().count());

    let mut out = String::new();
    for (i, line) in message.text.lines().enumerate() {
        if i == 0 {
            out.push_str(&prefix);
        } else {
            out.push('\n');
            out.push_str(&indent);
        }
        out.push_str(line);
    }
    if out.is_empty() {
        out = prefix;
    }
    out
}
