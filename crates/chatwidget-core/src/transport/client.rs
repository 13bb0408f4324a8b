//! REST transport struct, request building, and response parsing.

use std::time::Duration;

use chatwidget_config::schema::ServerConfig;
use serde::Serialize;
use tracing::debug;

use crate::{AgentReply, TransportError};

use super::payload::WebhookRequest;

/// Longest error body kept in `TransportError::Status`.
const MAX_ERROR_BODY: usize = 200;

/// `Transport` over HTTP to the agent's REST webhook.
#[derive(Debug, Clone)]
pub struct RestTransport {
    pub(crate) webhook_url: String,
    pub(crate) http: reqwest::Client,
}

impl RestTransport {
    pub fn new(
        webhook_url: impl Into<String>,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self::with_client(webhook_url, http))
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, TransportError> {
        Self::new(
            config.webhook_url(),
            Duration::from_secs(u64::from(config.request_timeout)),
            Duration::from_secs(u64::from(config.connect_timeout)),
        )
    }

    /// Use a preconfigured client (proxy settings, custom TLS).
    pub fn with_client(webhook_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            http,
        }
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// POST one envelope and return the raw response body on 2xx.
    pub(crate) async fn post<M: Serialize>(
        &self,
        request: &WebhookRequest<'_, M>,
    ) -> Result<String, TransportError> {
        let response = self
            .http
            .post(&self.webhook_url)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            let body = text.chars().take(MAX_ERROR_BODY).collect::<String>();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(text)
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(e.to_string())
    }
}

/// Parse the agent's reply list.
///
/// The body must be a JSON array; entries without a string `text` (images,
/// buttons, custom payloads) are skipped.
pub(crate) fn parse_replies(body: &str) -> Result<Vec<AgentReply>, TransportError> {
    let json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| TransportError::Parse(e.to_string()))?;
    let entries = json
        .as_array()
        .ok_or_else(|| TransportError::Parse("expected a JSON array of replies".into()))?;

    let mut replies = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry["text"].as_str() {
            Some(text) => replies.push(AgentReply::new(text)),
            None => debug!(?entry, "Skipping non-text reply"),
        }
    }
    Ok(replies)
}
