//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod messages;
mod server;
mod timing;


use crate::schema::WidgetConfig;
use chatwidget_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WidgetConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    server::validate_server(&mut errors, config);
    timing::validate_inactivity(&mut errors, config);
    timing::validate_pacing(&mut errors, config);
    messages::validate_messages(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
