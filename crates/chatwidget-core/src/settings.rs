//! Runtime settings for a `ChatWidget`, derived from `WidgetConfig`.

use std::time::Duration;

use chatwidget_config::WidgetConfig;

/// Thresholds, pacing, and visitor-facing strings used by the widget.
#[derive(Debug, Clone)]
pub struct WidgetSettings {
    pub warn_after: Duration,
    pub terminate_after: Duration,
    pub reply_delay: Duration,
    pub suggestions_delay: Duration,
    pub restart_offer_delay: Duration,
    pub badge_delay: Duration,
    pub greeting: String,
    pub suggestions: String,
    pub fallback: String,
    pub transport_error: String,
    pub inactivity_warning: String,
    pub farewell: String,
    pub auto_farewell: String,
    pub name_required: String,
    pub introduction: String,
    pub introduce_to_agent: bool,
}

impl WidgetSettings {
    pub fn from_config(config: &WidgetConfig) -> Self {
        let m = &config.messages;
        Self {
            warn_after: Duration::from_secs(config.inactivity.warn_after),
            terminate_after: Duration::from_secs(config.inactivity.terminate_after),
            reply_delay: Duration::from_millis(config.pacing.reply_delay_ms),
            suggestions_delay: Duration::from_millis(config.pacing.suggestions_delay_ms),
            restart_offer_delay: Duration::from_millis(config.pacing.restart_offer_delay_ms),
            badge_delay: Duration::from_millis(config.pacing.badge_delay_ms),
            greeting: m.greeting.clone(),
            suggestions: m.suggestions.clone(),
            fallback: m.fallback.clone(),
            transport_error: m.transport_error.clone(),
            inactivity_warning: m.inactivity_warning.clone(),
            farewell: m.farewell.clone(),
            auto_farewell: m.auto_farewell.clone(),
            name_required: m.name_required.clone(),
            introduction: m.introduction.clone(),
            introduce_to_agent: m.introduce_to_agent,
        }
    }

    pub fn with_thresholds(mut self, warn_after: Duration, terminate_after: Duration) -> Self {
        self.warn_after = warn_after;
        self.terminate_after = terminate_after;
        self
    }

    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    pub fn with_suggestions(mut self, text: impl Into<String>) -> Self {
        self.suggestions = text.into();
        self
    }

    pub fn with_introduction(mut self, enabled: bool) -> Self {
        self.introduce_to_agent = enabled;
        self
    }

    pub(crate) fn render_greeting(&self, name: &str) -> String {
        self.greeting.replace("{name}", name)
    }

    pub(crate) fn render_introduction(&self, name: &str) -> String {
        self.introduction.replace("{name}", name)
    }

    pub(crate) fn render_warning(&self) -> String {
        self.inactivity_warning
            .replace("{idle_minutes}", &minutes(self.warn_after).to_string())
            .replace("{grace_minutes}", &minutes(self.terminate_after).to_string())
    }
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self::from_config(&WidgetConfig::default())
    }
}

/// Whole minutes, rounded up so a 90 s threshold reads as 2 minutes.
fn minutes(d: Duration) -> u64 {
    d.as_secs().div_ceil(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_config_defaults() {
        let settings = WidgetSettings::default();
        assert_eq!(settings.warn_after, Duration::from_secs(600));
        assert_eq!(settings.terminate_after, Duration::from_secs(120));
        assert_eq!(settings.reply_delay, Duration::from_millis(300));
        assert!(!settings.introduce_to_agent);
    }

    #[test]
    fn config_overrides_flow_through() {
        let mut config = WidgetConfig::default();
        config.inactivity.warn_after = 30;
        config.inactivity.terminate_after = 5;
        config.messages.fallback = "Pardon?".into();
        let settings = WidgetSettings::from_config(&config);
        assert_eq!(settings.warn_after, Duration::from_secs(30));
        assert_eq!(settings.terminate_after, Duration::from_secs(5));
        assert_eq!(settings.fallback, "Pardon?");
    }

    #[test]
    fn greeting_mentions_visitor() {
        let settings = WidgetSettings::default();
        let text = settings.render_greeting("Jean Dupont");
        assert!(text.starts_with("Bonjour Jean Dupont!"));
        assert!(!text.contains("{name}"));
    }

    #[test]
    fn warning_renders_minutes() {
        let settings = WidgetSettings::default();
        let text = settings.render_warning();
        assert!(text.contains("pendant 10 minutes"));
        assert!(text.contains("dans 2 minutes"));
    }

    #[test]
    fn partial_minutes_round_up() {
        assert_eq!(minutes(Duration::from_secs(90)), 2);
        assert_eq!(minutes(Duration::from_secs(60)), 1);
        assert_eq!(minutes(Duration::from_secs(1)), 1);
    }
}
