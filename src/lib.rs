use axum::Router;
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::Config;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;

/// Builds the full application router with its HTTP middleware.
///
/// CORS is attached as a route layer so unmatched paths, preflights included,
/// still get axum's default 404.
pub fn app(config: &Config) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::v1_router())
        .route_layer(cors_layer(&config.cors_allowed_origins))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    // AllowOrigin::list panics on a wildcard entry
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.iter().cloned())
    };

    CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_origin(allow_origin)
}
