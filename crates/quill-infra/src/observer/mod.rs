//! Request observer implementations.

mod tracing_observer;

pub use tracing_observer::TracingRequestObserver;
