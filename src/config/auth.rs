//! Authentication header building for API requests.

use super::types::ApiConfig;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the `Authorization` header from the configured token variable.
///
/// Returns `None` when no variable is configured, or when it is unset or empty.
pub fn build_auth_header(api: &ApiConfig) -> Option<AuthHeader> {
    let var = api.token_env_var.as_deref()?;
    let token = std::env::var(var).ok()?;
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    Some(("Authorization".to_string(), format!("Bearer {}", token)))
}
