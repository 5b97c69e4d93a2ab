//! Client configuration

use serde::{Deserialize, Serialize};

/// Fallback backend location for local development
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Configuration for the API gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend base URL; a trailing slash is appended if missing
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Build the configuration from the compile-time environment.
    ///
    /// Browser builds have no runtime environment, so the base URL is
    /// baked in via `TALLY_API_URL` at compile time.
    pub fn from_env() -> Self {
        match option_env!("TALLY_API_URL") {
            Some(url) if !url.is_empty() => Self {
                base_url: url.to_string(),
            },
            _ => Self::default(),
        }
    }

    /// Base URL normalized to end with a single slash
    pub fn normalized_base_url(&self) -> String {
        let trimmed = self.base_url.trim_end_matches('/');
        format!("{trimmed}/")
    }
}
