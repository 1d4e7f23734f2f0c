//! Client configuration: defaults plus environment overrides.

/// Static settings shared by every request the client builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub client_id: String,
    pub api_version: String,
    /// Reported in check-in bodies as `app_version`.
    pub app_version: String,
    /// Reported in check-in bodies as `app_date`.
    pub app_date: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.trakt.tv".into(),
            client_id: String::new(),
            api_version: "2".into(),
            app_version: "1.2".into(),
            app_date: "2016-01-23".into(),
        }
    }
}

impl ClientConfig {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Self::default()
        }
    }

    /// Build a config from defaults, overridden by `TRAKT_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let overrides: [(&str, &mut String); 5] = [
            ("TRAKT_API_URL", &mut config.base_url),
            ("TRAKT_CLIENT_ID", &mut config.client_id),
            ("TRAKT_API_VERSION", &mut config.api_version),
            ("TRAKT_APP_VERSION", &mut config.app_version),
            ("TRAKT_APP_DATE", &mut config.app_date),
        ];
        for (key, slot) in overrides {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *slot = value.trim().to_string();
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_target_public_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.trakt.tv");
        assert_eq!(config.api_version, "2");
        assert!(config.client_id.is_empty());
    }

    #[test]
    fn lookup_overrides_selected_fields() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("TRAKT_CLIENT_ID", "abc123"),
            ("TRAKT_API_URL", " http://localhost:9000 "),
            ("TRAKT_APP_DATE", ""),
        ]);
        let config = ClientConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.client_id, "abc123");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.app_date, "2016-01-23");
        assert_eq!(config.app_version, "1.2");
    }
}
