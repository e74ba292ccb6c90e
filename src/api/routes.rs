//! API route configuration.
//!
//! All mapping management endpoints require basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Mapping management routes, protected by basic authentication.
///
/// # Endpoints
///
/// - `POST   /url`           - Store a mapping (alias optional)
/// - `DELETE /url/{alias}`   - Delete a mapping
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/{alias}", delete(delete_handler))
}
