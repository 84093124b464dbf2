/// Metadata describing one GraphQL request.
#[derive(Debug, Clone)]
pub struct RequestInfo {
    /// Operation name from the request document, if the client sent one.
    pub operation_name: Option<String>,
}

/// How a request finished.
#[derive(Debug, Clone)]
pub enum RequestOutcome {
    Success,
    /// One message per entry in the GraphQL errors array.
    Failed { errors: Vec<String> },
}

/// Observability hook around request execution.
///
/// Implementations must not fail and must not block; they see every
/// request regardless of outcome.
pub trait RequestObserver: Send + Sync {
    fn on_request_start(&self, info: &RequestInfo);

    fn on_request_end(&self, info: &RequestInfo, outcome: &RequestOutcome);
}
