//! HTTP handlers and route configuration.

mod graphql;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/graphql", web::post().to(graphql::execute))
        .route("/graphql", web::get().to(graphql::playground))
        .route("/api/health", web::get().to(health::health_check));
}
