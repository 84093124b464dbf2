//! Request observer backed by `tracing`.

use quill_core::ports::{RequestInfo, RequestObserver, RequestOutcome};

/// Logs request lifecycle events as structured tracing events.
///
/// Anonymous operations are logged under a fixed placeholder name so the
/// operation field is always present.
pub struct TracingRequestObserver;

const ANONYMOUS: &str = "<anonymous>";

impl RequestObserver for TracingRequestObserver {
    fn on_request_start(&self, info: &RequestInfo) {
        tracing::info!(
            operation = info.operation_name.as_deref().unwrap_or(ANONYMOUS),
            "graphql request started"
        );
    }

    fn on_request_end(&self, info: &RequestInfo, outcome: &RequestOutcome) {
        let operation = info.operation_name.as_deref().unwrap_or(ANONYMOUS);
        match outcome {
            RequestOutcome::Success => {
                tracing::info!(operation, "graphql request completed");
            }
            RequestOutcome::Failed { errors } => {
                tracing::warn!(
                    operation,
                    errors = %errors.join("; "),
                    "graphql request failed"
                );
            }
        }
    }
}
