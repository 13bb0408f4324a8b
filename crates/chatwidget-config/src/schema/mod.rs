//! Configuration schema types for the chat widget.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the reference widget's behavior.

mod inactivity;
mod messages;
mod pacing;
mod server;
mod system;

pub use inactivity::*;
pub use messages::*;
pub use pacing::*;
pub use server::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the chat widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct WidgetConfig {
    pub server: ServerConfig,
    pub inactivity: InactivityConfig,
    pub pacing: PacingConfig,
    pub messages: MessagesConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
