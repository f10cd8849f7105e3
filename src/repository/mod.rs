//! Repository facade: the seam between the engine and the network.
//!
//! The engine only talks to [`ProfileRepository`]. Production code plugs in
//! [`NetworkRepository`]; tests plug in scripted implementations.

mod error;

pub use error::{FailureKind, FetchError};

use async_trait::async_trait;

use crate::gateway::GitHubGateway;
use crate::model::{Profile, RepositorySummary};

/// Read access to account data.
///
/// Every call is a fresh round-trip: no retries, no caching.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch the profile for `identifier`.
    async fn fetch_profile(&self, identifier: &str) -> Result<Profile, FetchError>;

    /// Fetch the repository list for `identifier`, in service order.
    async fn fetch_repositories(
        &self,
        identifier: &str,
    ) -> Result<Vec<RepositorySummary>, FetchError>;
}

/// [`ProfileRepository`] backed by the remote service.
pub struct NetworkRepository {
    gateway: GitHubGateway,
}

impl NetworkRepository {
    pub fn new(gateway: GitHubGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ProfileRepository for NetworkRepository {
    async fn fetch_profile(&self, identifier: &str) -> Result<Profile, FetchError> {
        let result = self.gateway.get_profile(identifier).await;
        if let Err(err) = &result {
            tracing::warn!(
                identifier = %identifier,
                error_type = err.error_type(),
                error = %err,
                "Profile fetch failed"
            );
        }
        result
    }

    async fn fetch_repositories(
        &self,
        identifier: &str,
    ) -> Result<Vec<RepositorySummary>, FetchError> {
        match self.gateway.get_repositories(identifier).await {
            Ok(repositories) => {
                tracing::debug!(
                    identifier = %identifier,
                    count = repositories.len(),
                    "Repositories fetched"
                );
                Ok(repositories)
            }
            Err(err) => {
                tracing::warn!(
                    identifier = %identifier,
                    error_type = err.error_type(),
                    error = %err,
                    "Repository fetch failed"
                );
                Err(err)
            }
        }
    }
}
