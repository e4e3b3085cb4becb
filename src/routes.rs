//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /hello`   - Plain text greeting (public)
//! - `GET  /health`  - Health check: document store (public)
//! - `/api/*`        - Data exports, sent campaigns, analytics (rate limited)
//! - everything else - Static landing pages from the static directory
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, hello_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served for any path not matched by a route
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    let api_router = api::routes::api_routes().layer(rate_limit::layer());

    let router = Router::new()
        .route("/hello", get(hello_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
