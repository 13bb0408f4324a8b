//! Capability interface driven by a presentation layer.

use async_trait::async_trait;
use chatwidget_common::SessionId;

use crate::SessionError;

use super::{ChatWidget, Delivery};

/// Visitor actions a presentation forwards into the conversation core.
#[async_trait]
pub trait ChatHandler: Send + Sync {
    /// Floating button or close control. Returns the new panel state.
    async fn on_toggle(&self) -> bool;

    /// Identification form submitted.
    async fn on_identify(
        &self,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<(), SessionError>;

    /// Input focused or edited.
    async fn on_activity(&self);

    /// Visitor pressed send.
    async fn on_send(&self, text: &str) -> Result<Delivery, SessionError>;

    /// Visitor asked to end the conversation.
    async fn on_end_requested(&self) -> Result<(), SessionError>;

    /// Visitor accepted the restart offer.
    async fn on_restart(&self) -> SessionId;
}

#[async_trait]
impl ChatHandler for ChatWidget {
    async fn on_toggle(&self) -> bool {
        self.inner.toggle().await
    }

    async fn on_identify(
        &self,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<(), SessionError> {
        self.inner.identify(name, phone, email).await
    }

    async fn on_activity(&self) {
        self.inner.activity().await;
    }

    async fn on_send(&self, text: &str) -> Result<Delivery, SessionError> {
        self.inner.send(text).await
    }

    async fn on_end_requested(&self) -> Result<(), SessionError> {
        self.inner.end(false).await
    }

    async fn on_restart(&self) -> SessionId {
        self.inner.restart().await
    }
}
