use serde::{Deserialize, Serialize};

use crate::engine::SortOption;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

/// Connection settings for the hosting service API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base origin for all requests (e.g., "https://api.github.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value of the `User-Agent` header. The public API rejects requests without one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Environment variable holding an access token (e.g., "GITHUB_TOKEN").
    /// No `Authorization` header is sent when unset.
    #[serde(default)]
    pub token_env_var: Option<String>,
}

/// Display preferences applied at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub dark_theme: bool,
    #[serde(default)]
    pub sort: SortOption,
}

/// Startup behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Account searched as soon as the UI starts.
    #[serde(default)]
    pub initial_user: Option<String>,
}

fn default_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    concat!("ghprofile/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            token_env_var: None,
        }
    }
}
