use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/traffic", get(handlers::get_traffic_by_country))
        .route("/geo-cache/stats", get(handlers::get_geo_cache_stats))
        .with_state(state)
}

/// Full web surface: the report at `/` for the map client plus `/api`.
/// Any origin may call it.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::get_traffic_by_country))
        .with_state(state.clone())
        .nest("/api", create_api_routes(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
