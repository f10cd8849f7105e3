//! Account data returned by the hosting service.
//!
//! Both types deserialize straight from the service's JSON. Unknown fields
//! are ignored and optional text that is `null` or missing becomes `None`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A user or organization profile from `GET /users/{identifier}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Account identifier as reported by the service (its casing wins).
    pub login: String,
    pub avatar_url: String,
    /// Display name, when the account has one.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    /// Profile page on the service's website.
    #[serde(default)]
    pub html_url: Option<String>,
}

impl Profile {
    /// Display name if set, otherwise the login.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

/// One entry of `GET /users/{identifier}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Primary language tag.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(rename = "stargazers_count")]
    pub stars: u32,
    pub html_url: String,
    /// ISO-8601 timestamp of the last update.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl RepositorySummary {
    /// Parsed `updated_at`, or `None` when absent or malformed.
    pub fn updated_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        self.updated_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
    }
}
