//! API routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Origins allowed when `BOOKCLUB_CORS_ORIGINS` is unset (local development)
const DEFAULT_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(std::env::var("BOOKCLUB_CORS_ORIGINS").ok().as_deref());

    let api_routes = Router::new()
        .route("/shelf", get(handlers::get_shelf))
        .route("/now-reading", get(handlers::get_now_reading))
        .route("/history", get(handlers::get_history))
        .route("/books", get(handlers::list_books))
        .route("/refresh", post(handlers::refresh));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS for a `BOOKCLUB_CORS_ORIGINS` value: `*`, a comma-separated list, or
/// unset for the development defaults
fn cors_layer(setting: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match setting {
        Some("*") => cors.allow_origin(Any),
        Some(origins) => cors.allow_origin(AllowOrigin::list(parse_origins(origins))),
        None => cors.allow_origin(AllowOrigin::list(
            DEFAULT_ORIGINS.iter().map(|origin| HeaderValue::from_static(origin)),
        )),
    }
}

/// Split a comma-separated origin list, skipping entries that are not valid
/// header values
fn parse_origins(origins: &str) -> Vec<HeaderValue> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}
