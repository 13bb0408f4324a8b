//! Remote agent endpoint settings.

use serde::{Deserialize, Serialize};

/// Where the conversational backend lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the agent, without the webhook path.
    pub url: String,
    /// Path of the REST webhook, used for chat turns and the end notification.
    pub webhook_path: String,
    /// Whole-request timeout in seconds (valid range: 1-300).
    pub request_timeout: u32,
    /// TCP connect timeout in seconds (valid range: 1-120).
    pub connect_timeout: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:5005".into(),
            webhook_path: "/webhooks/rest/webhook".into(),
            request_timeout: 20,
            connect_timeout: 10,
        }
    }
}

impl ServerConfig {
    /// Full webhook URL: base URL joined with the webhook path.
    pub fn webhook_url(&self) -> String {
        let base = self.url.trim_end_matches('/');
        let path = self.webhook_path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
