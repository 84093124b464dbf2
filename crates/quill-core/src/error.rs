//! Store-level error types.

use thiserror::Error;

/// Errors a store implementation may surface.
///
/// The in-memory store is infallible, but the trait keeps `Result` returns
/// so a persistent backend can slot in without changing the port.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage backend failed: {0}")]
    Backend(String),
}
