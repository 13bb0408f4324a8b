//! Chat widget configuration system.
//!
//! Provides TOML-based configuration with environment overrides and full
//! validation. All config sections use sensible defaults so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chatwidget_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("agent at {}", config.server.url);
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{WidgetConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use chatwidget_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// Environment overrides are applied after the file, and the merged result
/// is validated. An explicitly given path must exist.
pub fn load_config(path: Option<&Path>) -> Result<WidgetConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    env::apply_env_overrides(&mut config)?;
    validation::validate(&config)?;
    Ok(config)
}
