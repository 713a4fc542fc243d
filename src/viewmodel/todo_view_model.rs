//! Screen state for the host window.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::domain::{FetchOutcome, Todo};
use crate::repository::TodoRepository;

/// What the screen currently knows.
///
/// Starts in `Loading`; each fetch ends in exactly one terminal variant.
/// A reload re-enters `Loading` before the next terminal state; there is
/// no direct `Success -> Error` transition.
#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    Loading,
    Success(Todo),
    Error(String),
}

/// Owns the published [`UiState`] and triggers fetches.
///
/// `load()` spawns one task per call and never cancels earlier ones. A task
/// finishing after a newer `load()` finds its generation stale and discards
/// its result, so the most recently started request wins.
pub struct TodoViewModel {
    repository: Arc<dyn TodoRepository>,
    state: Arc<watch::Sender<UiState>>,
    generation: Arc<AtomicU64>,
}

impl TodoViewModel {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        let (state, _) = watch::channel(UiState::Loading);
        Self {
            repository,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Subscribe to state changes. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Start one fetch.
    ///
    /// Also the retry entry point: the state re-enters `Loading` before the
    /// terminal state is published.
    pub fn load(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(UiState::Loading);

        let repository = Arc::clone(&self.repository);
        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);
        tauri::async_runtime::spawn(async move {
            let outcome = repository.fetch_todo().await;
            if current.load(Ordering::SeqCst) != generation {
                debug!(generation, "discarding superseded fetch result");
                return;
            }
            let next = match outcome {
                FetchOutcome::Success(todo) => UiState::Success(todo),
                FetchOutcome::Failure(message) => UiState::Error(message),
            };
            state.send_replace(next);
        });
    }
}
