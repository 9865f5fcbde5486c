//! Application state shared by all request handlers.

use std::sync::Arc;

use tutorials_core::storage::TutorialStore;

use crate::service::TutorialService;
use crate::storage::inmemory::InMemoryStore;

/// Application state holding the table store handle.
///
/// The store is built once at startup and injected here; handlers reach it
/// through [`TutorialService`].
#[derive(Clone)]
pub struct AppState {
    pub tutorials: TutorialService,
}

impl AppState {
    pub fn new(store: Arc<dyn TutorialStore>) -> Self {
        Self {
            tutorials: TutorialService::new(store),
        }
    }
}

impl Default for AppState {
    /// State backed by an empty in-memory store.
    fn default() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }
}
