//! Axum router wiring.

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{app_state::AppState, http};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::shell::index))
        .route("/health", get(http::health::health))
        .route("/latest", get(http::latest::latest))
        .route("/metrics", get(http::metrics::metrics))
        // after the routes so unmatched requests (404s) are counted too
        .layer(middleware::from_fn_with_state(state.clone(), http::metrics::track))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
