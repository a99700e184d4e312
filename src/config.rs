//! Application configuration loaded from environment variables.
//!
//! The backend base URL and the session bearer token are handed to the app
//! by its host environment; everything else has a sensible default.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the club backend API
    pub api_base_url: String,
    /// Bearer token for authenticated endpoints (absent for public views)
    pub api_token: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            api_token: None,
            request_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            api_base_url: env::var("CLUB_API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("CLUB_API_BASE_URL"))?,
            api_token: env::var("CLUB_API_TOKEN")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            request_timeout_secs: env::var("CLUB_API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("CLUB_API_BASE_URL", "https://clubs.example.edu/api/");
        env::set_var("CLUB_API_TOKEN", "  token-123  ");

        let config = Config::from_env().expect("Config should load");

        // Trailing slash is trimmed so endpoint paths can be appended.
        assert_eq!(config.api_base_url, "https://clubs.example.edu/api");
        assert_eq!(config.api_token.as_deref(), Some("token-123"));
        assert_eq!(config.request_timeout_secs, 10);
    }
}
