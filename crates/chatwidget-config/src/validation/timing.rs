//! Validation for inactivity thresholds and pacing delays.

use crate::schema::WidgetConfig;

use super::helpers::validate_range;

const ONE_DAY_SECS: u64 = 86_400;

/// Validate inactivity thresholds.
pub(crate) fn validate_inactivity(errors: &mut Vec<String>, config: &WidgetConfig) {
    validate_range(
        errors,
        "inactivity.warn_after",
        config.inactivity.warn_after,
        1,
        ONE_DAY_SECS,
    );
    validate_range(
        errors,
        "inactivity.terminate_after",
        config.inactivity.terminate_after,
        1,
        ONE_DAY_SECS,
    );
}

/// Validate pacing delays.
pub(crate) fn validate_pacing(errors: &mut Vec<String>, config: &WidgetConfig) {
    validate_range(
        errors,
        "pacing.reply_delay_ms",
        config.pacing.reply_delay_ms,
        0,
        5_000,
    );
    validate_range(
        errors,
        "pacing.suggestions_delay_ms",
        config.pacing.suggestions_delay_ms,
        0,
        60_000,
    );
    validate_range(
        errors,
        "pacing.restart_offer_delay_ms",
        config.pacing.restart_offer_delay_ms,
        0,
        60_000,
    );
    validate_range(
        errors,
        "pacing.badge_delay_ms",
        config.pacing.badge_delay_ms,
        0,
        600_000,
    );
}
