//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`       - Alias redirect (public)
//! - `GET    /health`        - Health check (public)
//! - `POST   /url`           - Store a mapping (basic auth)
//! - `DELETE /url/{alias}`   - Delete a mapping (basic auth)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned and echoed on the response
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Requests exceeding the configured limit get 408
//! - **Authentication** - Basic auth on management routes

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on handling a single request
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    let api_router = api::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::layer,
    ));

    Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api_router)
        .with_state(state)
        .layer(timeout_layer(request_timeout))
        .layer(tracing::layer())
        .layer(tracing::propagate_request_id_layer())
        .layer(tracing::set_request_id_layer())
}

/// Answers `408 Request Timeout` for requests running longer than `timeout`.
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_slow_request_times_out() {
        let app = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "done"
                }),
            )
            .layer(timeout_layer(Duration::from_millis(50)));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/slow").await;

        response.assert_status(StatusCode::REQUEST_TIMEOUT);
    }
}
