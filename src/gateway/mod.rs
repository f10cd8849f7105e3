//! Remote gateway: transport and deserialization for the hosting service.
//!
//! Knows the endpoint layout and status-code conventions of the service and
//! nothing else. Failures come back as [`FetchError`](crate::repository::FetchError).

mod client;

pub use client::{GitHubGateway, TimeoutConfig};
