//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

use super::log_storage_error;

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Response
///
/// `302 Found` with the target URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if no mapping exists for the alias.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    const OP: &str = "handlers.redirect";

    let target_url = state
        .link_service
        .resolve(&alias)
        .await
        .inspect_err(|e| log_storage_error(OP, e))?;

    tracing::info!(op = OP, %alias, url = %target_url, "Retrieved url");

    Ok((StatusCode::FOUND, [(header::LOCATION, target_url)]))
}
