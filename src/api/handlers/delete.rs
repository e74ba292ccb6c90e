//! Handler for mapping removal.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::save::StatusResponse;
use crate::error::AppError;
use crate::state::AppState;

use super::log_storage_error;

/// Deletes the mapping bound to an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (basic auth)
///
/// # Behavior
///
/// The row is removed. Deleting the same alias again returns 404, and the
/// alias becomes free for a new mapping.
///
/// # Errors
///
/// Returns 404 Not Found if no mapping exists for the alias.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, AppError> {
    const OP: &str = "handlers.delete";

    state
        .link_service
        .delete(&alias)
        .await
        .inspect_err(|e| log_storage_error(OP, e))?;

    tracing::info!(op = OP, %alias, "Url deleted");

    Ok(Json(StatusResponse::ok()))
}
