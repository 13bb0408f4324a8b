//! Environment variable overrides, applied on top of the loaded file.

use chatwidget_common::ConfigError;
use tracing::info;

use crate::schema::WidgetConfig;

pub const ENV_SERVER_URL: &str = "CHATWIDGET_SERVER_URL";
pub const ENV_WARN_AFTER: &str = "CHATWIDGET_WARN_AFTER";
pub const ENV_TERMINATE_AFTER: &str = "CHATWIDGET_TERMINATE_AFTER";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut WidgetConfig) -> Result<(), ConfigError> {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary lookup. Blank values are ignored.
pub fn apply_overrides_from<F>(config: &mut WidgetConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = get(ENV_SERVER_URL) {
        info!("{ENV_SERVER_URL} overrides server.url");
        config.server.url = url.trim().to_string();
    }
    if let Some(raw) = get(ENV_WARN_AFTER) {
        config.inactivity.warn_after = parse_secs(ENV_WARN_AFTER, &raw)?;
    }
    if let Some(raw) = get(ENV_TERMINATE_AFTER) {
        config.inactivity.terminate_after = parse_secs(ENV_TERMINATE_AFTER, &raw)?;
    }
    Ok(())
}

fn parse_secs(key: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|e| {
        ConfigError::ParseError(format!("{key} = {raw:?} is not a number of seconds: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn no_variables_leaves_config_untouched() {
        let mut config = WidgetConfig::default();
        apply_overrides_from(&mut config, lookup(&[])).unwrap();
        assert_eq!(config.server.url, "http://localhost:5005");
        assert_eq!(config.inactivity.warn_after, 600);
    }

    #[test]
    fn overrides_url_and_thresholds() {
        let mut config = WidgetConfig::default();
        apply_overrides_from(
            &mut config,
            lookup(&[
                (ENV_SERVER_URL, " https://bot.example.org "),
                (ENV_WARN_AFTER, "45"),
                (ENV_TERMINATE_AFTER, "15"),
            ]),
        )
        .unwrap();
        assert_eq!(config.server.url, "https://bot.example.org");
        assert_eq!(config.inactivity.warn_after, 45);
        assert_eq!(config.inactivity.terminate_after, 15);
    }

    #[test]
    fn blank_values_are_ignored() {
        let mut config = WidgetConfig::default();
        apply_overrides_from(&mut config, lookup(&[(ENV_WARN_AFTER, "  ")])).unwrap();
        assert_eq!(config.inactivity.warn_after, 600);
    }

    #[test]
    fn non_numeric_threshold_is_a_parse_error() {
        let mut config = WidgetConfig::default();
        let err = apply_overrides_from(&mut config, lookup(&[(ENV_TERMINATE_AFTER, "2m")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().contains(ENV_TERMINATE_AFTER));
    }
}
