//! Backend service for the ping-pong scaffold.
//!
//! One route, no state. The router is exposed separately from `main` so
//! tests can drive it without binding a socket.

pub mod config;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router.
///
/// CORS is wide open so the web-app can call the server from a different
/// origin during development.
pub fn create_app() -> Router {
    Router::new()
        .route("/ping", get(routes::ping::get))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
