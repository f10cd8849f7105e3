//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use ghprofile::model::{Profile, RepositorySummary};
use ghprofile::repository::{FetchError, ProfileRepository};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::Semaphore;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Fixtures -----------------------------------------------------------------

pub fn profile(login: &str) -> Profile {
    Profile {
        login: login.to_string(),
        avatar_url: format!("https://avatars.example.com/{}", login),
        name: None,
        bio: None,
        public_repos: 2,
        followers: 10,
        following: 3,
        html_url: Some(format!("https://github.com/{}", login)),
    }
}

pub fn repo(name: &str, stars: u32) -> RepositorySummary {
    RepositorySummary {
        name: name.to_string(),
        description: None,
        language: None,
        stars,
        html_url: format!("https://github.com/o/{}", name),
        updated_at: None,
    }
}

/// JSON body of `GET /users/{login}`, with a few fields the client ignores.
pub fn profile_json(login: &str) -> String {
    format!(
        r#"{{
  "login": "{login}",
  "id": 583231,
  "avatar_url": "https://avatars.example.com/{login}",
  "type": "User",
  "name": null,
  "bio": null,
  "public_repos": 2,
  "followers": 10,
  "following": 3,
  "html_url": "https://github.com/{login}"
}}"#
    )
}

/// JSON body of `GET /users/{login}/repos` with repos A (5 stars) and B (9 stars).
pub fn repos_json() -> String {
    r#"[
  {"id": 1, "name": "A", "description": null, "language": "Rust", "stargazers_count": 5,
   "html_url": "https://github.com/o/A", "fork": false, "updated_at": "2024-01-01T00:00:00Z"},
  {"id": 2, "name": "B", "description": "second", "language": null, "stargazers_count": 9,
   "html_url": "https://github.com/o/B", "fork": false, "updated_at": "2023-01-01T00:00:00Z"}
]"#
    .to_string()
}

// -- FakeRepository -----------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Call {
    Profile(String),
    Repositories(String),
}

/// Scripted [`ProfileRepository`].
///
/// Unscripted identifiers answer `NotFound`. Each fetch has its own gate, so
/// a test can hold the profile and let the repositories through, or the
/// other way round.
#[derive(Default)]
pub struct FakeRepository {
    profiles: Mutex<HashMap<String, Result<Profile, FetchError>>>,
    repositories: Mutex<HashMap<String, Result<Vec<RepositorySummary>, FetchError>>>,
    gates: Mutex<HashMap<Call, Arc<Semaphore>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Script a full success for `identifier`.
    pub fn succeed(&self, identifier: &str, profile: Profile, repositories: Vec<RepositorySummary>) {
        self.set_profile(identifier, Ok(profile));
        self.set_repositories(identifier, Ok(repositories));
    }

    pub fn set_profile(&self, identifier: &str, result: Result<Profile, FetchError>) {
        self.profiles.lock().insert(identifier.to_string(), result);
    }

    pub fn set_repositories(
        &self,
        identifier: &str,
        result: Result<Vec<RepositorySummary>, FetchError>,
    ) {
        self.repositories
            .lock()
            .insert(identifier.to_string(), result);
    }

    /// Hold both fetches for `identifier` until [`open`](Self::open).
    pub fn gate(&self, identifier: &str) {
        self.gate_call(Call::Profile(identifier.to_string()));
        self.gate_call(Call::Repositories(identifier.to_string()));
    }

    pub fn open(&self, identifier: &str) {
        self.open_call(&Call::Profile(identifier.to_string()));
        self.open_call(&Call::Repositories(identifier.to_string()));
    }

    /// Hold one fetch until [`open_call`](Self::open_call).
    pub fn gate_call(&self, call: Call) {
        self.gates.lock().insert(call, Arc::new(Semaphore::new(0)));
    }

    pub fn open_call(&self, call: &Call) {
        if let Some(gate) = self.gates.lock().get(call) {
            gate.add_permits(1);
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Record `call`, then wait on its gate if it has one.
    async fn enter(&self, call: Call) {
        self.calls.lock().push(call.clone());
        let gate = self.gates.lock().get(&call).cloned();
        if let Some(gate) = gate {
            // Permit goes back on drop so later searches for the same call pass.
            let _permit = gate.acquire().await.expect("gate closed");
        }
    }

    fn not_found(identifier: &str) -> FetchError {
        FetchError::NotFound {
            identifier: identifier.to_string(),
        }
    }
}

#[async_trait]
impl ProfileRepository for FakeRepository {
    async fn fetch_profile(&self, identifier: &str) -> Result<Profile, FetchError> {
        self.enter(Call::Profile(identifier.to_string())).await;
        self.profiles
            .lock()
            .get(identifier)
            .cloned()
            .unwrap_or_else(|| Err(Self::not_found(identifier)))
    }

    async fn fetch_repositories(
        &self,
        identifier: &str,
    ) -> Result<Vec<RepositorySummary>, FetchError> {
        self.enter(Call::Repositories(identifier.to_string())).await;
        self.repositories
            .lock()
            .get(identifier)
            .cloned()
            .unwrap_or_else(|| Err(Self::not_found(identifier)))
    }
}
