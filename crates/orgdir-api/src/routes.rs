//! API route definitions

use axum::{middleware::from_fn, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{
    handlers::health,
    middleware::logging::logging_middleware,
    resource,
    state::AppState,
};

/// All API routes
///
/// One resource router per aggregate, each mounted under its collection
/// segment, plus the health endpoint.
pub fn api_routes(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(state.clone());

    Router::new()
        .merge(health_routes)
        .nest("/companies", resource::routes(state.store.companies()))
        .nest("/departments", resource::routes(state.store.departments()))
        .nest("/teams", resource::routes(state.store.teams()))
        .layer(from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
}
