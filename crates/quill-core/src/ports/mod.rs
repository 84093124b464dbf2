//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod observer;
mod store;

pub use observer::{RequestInfo, RequestObserver, RequestOutcome};
pub use store::PostStore;
