//! GraphQL endpoint handlers.

use actix_web::{HttpResponse, web};
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use quill_core::ports::{RequestInfo, RequestOutcome};

use crate::state::AppState;

/// Execute a GraphQL request.
///
/// POST /graphql
pub async fn execute(state: web::Data<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req.into_inner();
    let info = RequestInfo {
        operation_name: request.operation_name.clone(),
    };

    state.observer.on_request_start(&info);
    let response = state.schema.execute(request).await;

    let outcome = if response.errors.is_empty() {
        RequestOutcome::Success
    } else {
        RequestOutcome::Failed {
            errors: response.errors.iter().map(|e| e.message.clone()).collect(),
        }
    };
    state.observer.on_request_end(&info, &outcome);

    response.into()
}

/// Interactive playground for manual queries.
///
/// GET /graphql
pub async fn playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
