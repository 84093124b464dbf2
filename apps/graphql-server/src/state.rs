//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{PostStore, RequestObserver};
use quill_infra::{InMemoryPostStore, TracingRequestObserver};

use crate::schema::{PostsSchema, build_schema};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub schema: PostsSchema,
    pub observer: Arc<dyn RequestObserver>,
}

impl AppState {
    /// Build the application state with the in-memory store and the
    /// tracing-backed request observer.
    pub fn new() -> Self {
        let store: Arc<dyn PostStore> = Arc::new(InMemoryPostStore::seeded());
        let observer: Arc<dyn RequestObserver> = Arc::new(TracingRequestObserver);

        tracing::info!("Application state initialized (in-memory store, 4 seed posts)");

        Self {
            schema: build_schema(store),
            observer,
        }
    }
}
