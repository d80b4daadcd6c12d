use std::sync::Arc;

use bookshelf_core::BookStore;

/// Shared application state
///
/// Holds the catalog store behind its trait so tests can point it at a
/// temporary directory. There is no other cross-request state: handlers
/// reload the catalog from disk on every request.
pub struct AppState {
    store: Arc<dyn BookStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn BookStore {
        self.store.as_ref()
    }
}
