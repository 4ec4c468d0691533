//! # Configuration
//!
//! Settings read from the environment at startup.

/// Base URL of the user service when `MEETBRIDGE_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1/users";

const API_URL_VAR: &str = "MEETBRIDGE_API_URL";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where `/login` and `/register` live.
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = match lookup(API_URL_VAR) {
            Some(url) if !url.trim().is_empty() => {
                let url = url.trim().trim_end_matches('/').to_string();
                tracing::info!(%url, "Using user service from {API_URL_VAR}");
                url
            }
            _ => {
                tracing::debug!("{API_URL_VAR} not set, using {DEFAULT_API_URL}");
                DEFAULT_API_URL.to_string()
            }
        };

        Self { api_base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_uses_default() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn blank_variable_uses_default() {
        let config = AppConfig::from_lookup(|_| Some("   ".into()));
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn variable_overrides_and_is_normalized() {
        let config = AppConfig::from_lookup(|key| {
            (key == "MEETBRIDGE_API_URL").then(|| " https://meet.example.com/api/v1/users/ ".into())
        });
        assert_eq!(config.api_base_url, "https://meet.example.com/api/v1/users");
    }
}
