//! Profile lookup engine.
//!
//! Owns the process-wide lookup state and turns user intents into fetches
//! and state transitions.
//!
//! # Architecture
//!
//! Uses the MVI pattern from [`crate::ui::mvi`]:
//! - `state.rs` - [`ProfileState`] and the [`FetchState`] union
//! - `intent.rs` - every transition ([`ProfileIntent`])
//! - `reducer.rs` - pure transitions, including the generation check
//! - `sort.rs` - derived repository ordering
//!
//! [`ProfileEngine`] is the effectful shell around the reducer. A search
//! bumps the generation when it starts; its result is dispatched tagged with
//! that generation and the reducer drops it if a newer search has started
//! since. Results therefore commit in initiation order, whatever order the
//! network answers in.

mod intent;
mod reducer;
mod sort;
mod state;

pub use intent::ProfileIntent;
pub use reducer::ProfileReducer;
pub use sort::{sort_repositories, SortOption};
pub use state::{FetchFailure, FetchState, ProfileState};

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::repository::ProfileRepository;
use crate::ui::mvi::Reducer;

/// What happened to a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank identifier: no state change, no request.
    Skipped,
    /// The result (success or failure) became the current state.
    Committed,
    /// A newer search started before this one finished; result dropped.
    Superseded,
}

struct EngineInner {
    repository: Arc<dyn ProfileRepository>,
    state: Mutex<ProfileState>,
    updates: watch::Sender<ProfileState>,
}

/// Shared handle to the lookup state. Cheap to clone; all clones see the
/// same state.
#[derive(Clone)]
pub struct ProfileEngine {
    inner: Arc<EngineInner>,
}

impl ProfileEngine {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self::with_state(repository, ProfileState::default())
    }

    /// Start from `initial` (typically carrying display preferences).
    pub fn with_state(repository: Arc<dyn ProfileRepository>, initial: ProfileState) -> Self {
        let (updates, _) = watch::channel(initial.clone());
        Self {
            inner: Arc::new(EngineInner {
                repository,
                state: Mutex::new(initial),
                updates,
            }),
        }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> ProfileState {
        self.inner.state.lock().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ProfileState> {
        self.inner.updates.subscribe()
    }

    pub fn query(&self) -> String {
        self.inner.state.lock().query.clone()
    }

    /// Replace the search text verbatim. Never touches the fetch state.
    pub fn update_query(&self, text: impl Into<String>) {
        self.dispatch(ProfileIntent::UpdateQuery { text: text.into() });
    }

    pub fn toggle_theme(&self) {
        self.dispatch(ProfileIntent::ToggleTheme);
    }

    pub fn set_sort_option(&self, option: SortOption) {
        self.dispatch(ProfileIntent::SetSort { option });
    }

    /// Advance to the next sort option.
    pub fn cycle_sort(&self) {
        let next = self.inner.state.lock().sort.next();
        self.set_sort_option(next);
    }

    /// Search for the current query.
    pub async fn search(&self) -> SearchOutcome {
        let query = self.query();
        self.search_for(&query).await
    }

    /// Search for `identifier` (trimmed). Blank input is a no-op.
    pub async fn search_for(&self, identifier: &str) -> SearchOutcome {
        match self.begin_search(identifier) {
            Some((identifier, generation)) => self.complete_search(&identifier, generation).await,
            None => SearchOutcome::Skipped,
        }
    }

    /// Repeat the most recently started search; falls back to the query
    /// when nothing has been searched yet.
    pub async fn retry(&self) -> SearchOutcome {
        match self.last_identifier() {
            Some(identifier) => self.search_for(&identifier).await,
            None => self.search().await,
        }
    }

    /// Start a search for the current query on the tokio runtime.
    ///
    /// The state switches to `Loading` before this returns. Returns `None`
    /// when the query is blank.
    pub fn spawn_search(&self) -> Option<JoinHandle<SearchOutcome>> {
        let query = self.query();
        self.spawn_search_for(&query)
    }

    /// Background variant of [`search_for`](Self::search_for).
    pub fn spawn_search_for(&self, identifier: &str) -> Option<JoinHandle<SearchOutcome>> {
        let (identifier, generation) = self.begin_search(identifier)?;
        let engine = self.clone();
        Some(tokio::spawn(async move {
            engine.complete_search(&identifier, generation).await
        }))
    }

    /// Background variant of [`retry`](Self::retry).
    pub fn spawn_retry(&self) -> Option<JoinHandle<SearchOutcome>> {
        match self.last_identifier() {
            Some(identifier) => self.spawn_search_for(&identifier),
            None => self.spawn_search(),
        }
    }

    fn last_identifier(&self) -> Option<String> {
        self.inner.state.lock().last_identifier.clone()
    }

    /// Enter `Loading` for a new generation. Returns the trimmed identifier
    /// and the generation its result must carry.
    fn begin_search(&self, identifier: &str) -> Option<(String, u64)> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            tracing::debug!("Ignoring search with blank identifier");
            return None;
        }
        let generation = self.dispatch(ProfileIntent::SearchStarted {
            identifier: identifier.to_string(),
        });
        tracing::debug!(identifier = %identifier, generation, "Search started");
        Some((identifier.to_string(), generation))
    }

    async fn complete_search(&self, identifier: &str, generation: u64) -> SearchOutcome {
        let repository = &self.inner.repository;
        let result = tokio::try_join!(
            repository.fetch_profile(identifier),
            repository.fetch_repositories(identifier),
        );

        let committed = match result {
            Ok((profile, repositories)) => {
                let count = repositories.len();
                let current = self.dispatch(ProfileIntent::SearchSucceeded {
                    generation,
                    profile,
                    repositories,
                });
                if current == generation {
                    tracing::info!(
                        identifier = %identifier,
                        generation,
                        repositories = count,
                        "Search succeeded"
                    );
                }
                current == generation
            }
            Err(err) => {
                let current = self.dispatch(ProfileIntent::SearchFailed {
                    generation,
                    failure: FetchFailure::from(&err),
                });
                if current == generation {
                    tracing::info!(
                        identifier = %identifier,
                        generation,
                        error_type = err.error_type(),
                        "Search failed"
                    );
                }
                current == generation
            }
        };

        if committed {
            SearchOutcome::Committed
        } else {
            tracing::debug!(identifier = %identifier, generation, "Search superseded, result dropped");
            SearchOutcome::Superseded
        }
    }

    /// Run `intent` through the reducer, publish the new state if it changed,
    /// and return the resulting generation.
    fn dispatch(&self, intent: ProfileIntent) -> u64 {
        let mut state = self.inner.state.lock();
        *state = ProfileReducer::reduce(std::mem::take(&mut *state), intent);
        let next = &*state;
        self.inner.updates.send_if_modified(|published| {
            if published == next {
                return false;
            }
            *published = next.clone();
            true
        });
        state.generation
    }
}
