//! Handler for the save endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::alias_generator::validate_custom_alias;

use super::log_storage_error;

/// Stores a mapping from an alias to a URL.
///
/// # Endpoint
///
/// `POST /url` (basic auth)
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "alias": "shop"  // optional, generated when absent or empty
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "status": "OK", "alias": "shop", "url": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL or alias is invalid.
/// Returns 409 Conflict if the alias is already taken.
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    const OP: &str = "handlers.save";

    payload.validate().inspect_err(|e| {
        tracing::info!(op = OP, error = %e, "Request is not valid");
    })?;

    let alias = payload.alias.filter(|a| !a.is_empty());
    if let Some(alias) = &alias {
        validate_custom_alias(alias)?;
    }

    let mapping = state
        .link_service
        .create(&payload.url, alias.as_deref())
        .await
        .inspect_err(|e| log_storage_error(OP, e))?;

    tracing::info!(op = OP, id = mapping.id, alias = %mapping.alias, "Url added");

    Ok((
        StatusCode::CREATED,
        Json(SaveResponse::ok(mapping.alias, mapping.target_url)),
    ))
}
