use serde::{Deserialize, Serialize};

/// Idle thresholds, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InactivityConfig {
    /// Idle time before the warning message (valid range: 1-86400).
    pub warn_after: u64,
    /// Grace period between the warning and automatic termination
    /// (valid range: 1-86400).
    pub terminate_after: u64,
}

impl Default for InactivityConfig {
    fn default() -> Self {
        Self {
            warn_after: 10 * 60,
            terminate_after: 2 * 60,
        }
    }
}
