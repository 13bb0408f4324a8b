use serde::{Deserialize, Serialize};

/// Presentation delays, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Pause between consecutive agent replies (valid range: 0-5000).
    pub reply_delay_ms: u64,
    /// Delay before the suggestions message that follows the greeting.
    pub suggestions_delay_ms: u64,
    /// Delay between termination and the restart offer.
    pub restart_offer_delay_ms: u64,
    /// Delay before the unread badge appears on a closed panel.
    pub badge_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 300,
            suggestions_delay_ms: 1000,
            restart_offer_delay_ms: 3000,
            badge_delay_ms: 3000,
        }
    }
}
