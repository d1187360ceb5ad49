//! Ping endpoint.

use api::PingPongPayload;
use axum::Json;

/// GET /ping — returns the fixed `{"ping":"pong"}` payload.
///
/// Stateless and infallible; a fresh payload is built per request.
pub async fn get() -> Json<PingPongPayload> {
    Json(PingPongPayload::pong())
}
