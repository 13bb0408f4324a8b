//! HTTP relay to the Rasa-style REST channel.
//!
//! Visitor turns and the end-of-conversation report share one endpoint; the
//! report is distinguished by [`END_CONVERSATION_COMMAND`] in the `message`
//! field.

mod api;
mod client;
mod payload;


pub use client::RestTransport;
pub use payload::{EndOfConversation, END_CONVERSATION_COMMAND};
