//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! Currently everything is in-memory; a persistent store would live here
//! behind the same `PostStore` port.

pub mod observer;
pub mod store;

pub use observer::TracingRequestObserver;
pub use store::InMemoryPostStore;
