//! Build-time Configuration
//!
//! The client is a static bundle, so configuration is baked in when trunk
//! builds it: `TODO_API_URL` points at the task service and `TODO_LOG` picks
//! the console log level.

use log::LevelFilter;

/// API host used when `TODO_API_URL` is unset
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL without a trailing slash
    pub api_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::new(option_env!("TODO_API_URL"), option_env!("TODO_LOG"))
    }

    pub fn new(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        Self { api_url, log_level }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_local_api() {
        let config = AppConfig::new(None, None);
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_trims_trailing_slash_and_whitespace() {
        let config = AppConfig::new(Some(" https://todo.example.com/ "), None);
        assert_eq!(config.api_url, "https://todo.example.com");
    }

    #[test]
    fn test_blank_url_falls_back() {
        assert_eq!(AppConfig::new(Some("   "), None).api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(AppConfig::new(None, Some("debug")).log_level, LevelFilter::Debug);
        assert_eq!(AppConfig::new(None, Some("nonsense")).log_level, LevelFilter::Info);
    }
}
