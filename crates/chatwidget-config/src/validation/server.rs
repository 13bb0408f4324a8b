//! Validation for the agent endpoint.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::WidgetConfig;

use super::helpers::validate_range;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/?#]+(/[^\s?#]*)?$").unwrap());

/// Validate server URL, webhook path, and timeouts.
pub(crate) fn validate_server(errors: &mut Vec<String>, config: &WidgetConfig) {
    let server = &config.server;

    if !URL_RE.is_match(&server.url) {
        errors.push(format!(
            "server.url = {:?} must be an http(s) URL without query or fragment",
            server.url
        ));
    }

    if !server.webhook_path.starts_with('/') {
        errors.push(format!(
            "server.webhook_path = {:?} must start with '/'",
            server.webhook_path
        ));
    }

    validate_range(
        errors,
        "server.request_timeout",
        server.request_timeout.into(),
        1,
        300,
    );
    validate_range(
        errors,
        "server.connect_timeout",
        server.connect_timeout.into(),
        1,
        120,
    );
    if server.connect_timeout > server.request_timeout {
        errors.push(format!(
            "server.connect_timeout = {} exceeds server.request_timeout = {}",
            server.connect_timeout, server.request_timeout
        ));
    }
}
