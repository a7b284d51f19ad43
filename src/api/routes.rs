use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog view
        .route("/catalog", get(handlers::get_catalog))
        .route("/catalog/criteria", put(handlers::update_criteria))
        .route("/catalog/search", post(handlers::search))
        .route("/catalog/clear", post(handlers::clear))
        .route("/catalog/reload", post(handlers::reload))
        // Direct lookup
        .route("/movies", get(handlers::list_movies))
}
