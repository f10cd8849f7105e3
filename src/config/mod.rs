//! Configuration: TOML file, defaults and validation.

mod auth;
mod loader;
mod types;

pub use auth::{build_auth_header, AuthHeader};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, Defaults, DisplayConfig};
