use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::config::{build_auth_header, ApiConfig, ConfigError};
use crate::model::{Profile, RepositorySummary};
use crate::repository::FetchError;

const ACCEPT_JSON: &str = "application/vnd.github+json";

/// Timeouts applied to every gateway request.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutConfig {
    pub connect: Duration,
    pub request: Duration,
}

impl From<&ApiConfig> for TimeoutConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            connect: Duration::from_secs(u64::from(api.connect_timeout_seconds)),
            request: Duration::from_secs(u64::from(api.timeout_seconds)),
        }
    }
}

/// HTTP client for the two read endpoints of the hosting service.
pub struct GitHubGateway {
    client: Client,
    base_url: Url,
    timeouts: TimeoutConfig,
}

impl GitHubGateway {
    /// Build a gateway from API settings.
    ///
    /// Fails when the base URL is unusable or the HTTP client cannot be built.
    pub fn new(api: &ApiConfig) -> Result<Self, ConfigError> {
        let base_url = Url::parse(&api.base_url).map_err(|e| ConfigError::ValidationError {
            message: format!("Base URL '{}' is invalid: {}", api.base_url, e),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::ValidationError {
                message: format!("Base URL '{}' cannot carry a path", api.base_url),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
        if let Some((name, value)) = build_auth_header(api) {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ConfigError::ValidationError {
                    message: format!("Invalid auth header name: {}", e),
                }
            })?;
            let mut value =
                HeaderValue::from_str(&value).map_err(|_| ConfigError::ValidationError {
                    message: "Access token contains invalid characters".to_string(),
                })?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        let timeouts = TimeoutConfig::from(api);
        let client = Client::builder()
            .user_agent(api.user_agent.as_str())
            .default_headers(headers)
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
            .build()
            .map_err(|source| ConfigError::HttpClient { source })?;

        Ok(Self {
            client,
            base_url,
            timeouts,
        })
    }

    /// `GET {base}/users/{identifier}`
    pub async fn get_profile(&self, identifier: &str) -> Result<Profile, FetchError> {
        let url = self.endpoint(&["users", identifier])?;
        self.get_json(url, identifier).await
    }

    /// `GET {base}/users/{identifier}/repos`
    pub async fn get_repositories(
        &self,
        identifier: &str,
    ) -> Result<Vec<RepositorySummary>, FetchError> {
        let url = self.endpoint(&["users", identifier, "repos"])?;
        self.get_json(url, identifier).await
    }

    /// Append path segments to the base URL, percent-encoding each one.
    ///
    /// `.` and `..` would be resolved as path steps rather than encoded, so
    /// they are answered as `NotFound` here. No account can carry either name.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(FetchError::NotFound {
                identifier: dot.to_string(),
            });
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Connection(format!("Unusable base URL '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        identifier: &str,
    ) -> Result<T, FetchError> {
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                identifier: identifier.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                message: upstream_message(status, &body),
            });
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                duration: self.timeouts.request.as_secs(),
            }
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Connection(err.to_string())
        }
    }
}

/// Prefer the service's `{"message": ...}` error body, fall back to the reason phrase.
fn upstream_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string())
}
