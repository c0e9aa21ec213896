use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Construction-time settings handed to a provider by the host.
///
/// The host treats the mapping as opaque; recognized keys are up to the
/// individual provider. The example providers understand `user_key`,
/// `user_title` and (list provider only) `default_title`, all optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderConfig {
    pub settings: HashMap<String, Value>,
}

impl ProviderConfig {
    pub fn new(settings: HashMap<String, Value>) -> Self {
        Self { settings }
    }

    /// Look up a string-valued setting.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.settings.get(key) {
            Some(Value::String(value)) => Some(value.as_str()),
            Some(_) => {
                warn!("Ignoring non-string value for config key: {}", key);
                None
            }
            None => None,
        }
    }

    /// Look up a string-valued setting, falling back to `default`.
    pub fn str_or(&self, key: &str, default: &str) -> String {
        self.get_str(key).unwrap_or(default).to_string()
    }
}

impl From<HashMap<String, Value>> for ProviderConfig {
    fn from(settings: HashMap<String, Value>) -> Self {
        Self { settings }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_str_or_returns_default_when_missing() {
        let config = ProviderConfig::default();
        assert_eq!(config.str_or("user_key", "demo-user"), "demo-user");
    }

    #[test]
    fn test_str_or_returns_configured_value() {
        let mut settings = HashMap::new();
        settings.insert("user_key".to_string(), json!("plex-admin"));
        let config = ProviderConfig::new(settings);
        assert_eq!(config.str_or("user_key", "demo-user"), "plex-admin");
    }

    #[test]
    fn test_non_string_values_are_ignored() {
        let mut settings = HashMap::new();
        settings.insert("user_key".to_string(), json!(42));
        let config = ProviderConfig::new(settings);
        assert_eq!(config.get_str("user_key"), None);
        assert_eq!(config.str_or("user_key", "demo-user"), "demo-user");
    }

    #[test]
    fn test_deserializes_from_plain_mapping() {
        let config: ProviderConfig =
            serde_json::from_str(r#"{"user_key": "demo-user", "user_title": "Demo"}"#).unwrap();
        assert_eq!(config.get_str("user_title"), Some("Demo"));
    }
}
