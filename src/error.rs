//! Error types for the storage core and the HTTP layer.
//!
//! - [`StorageError`] is returned by every mapping store operation. Callers
//!   match on the variant to choose between a user-facing message and an
//!   internal diagnostic.
//! - [`AppError`] is the HTTP-facing error, rendered as a JSON body with a
//!   matching status code.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Failure of a mapping store operation.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The alias is already bound to a mapping. Nothing was written.
    #[error("alias '{alias}' already exists")]
    AliasExists { alias: String },

    /// No mapping exists for the alias.
    #[error("no url found for alias '{alias}'")]
    NotFound { alias: String },

    /// Any other persistence failure. Wraps the driver error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The database could not be opened at startup.
    #[error("failed to open storage at '{path}': {source}")]
    Bootstrap {
        path: String,
        #[source]
        source: sqlx::Error,
    },

    /// The schema could not be created at startup.
    #[error("failed to initialize schema: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StorageError {
    /// Returns true for the variants a caller may present as a normal
    /// outcome rather than an internal failure.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::AliasExists { .. } | Self::NotFound { .. })
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// HTTP-facing error with a JSON representation.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Unauthorized { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns the HTTP status this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::Unauthorized { message, details } => ("unauthorized", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            AppError::Validation { message, .. }
            | AppError::Unauthorized { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Internal { message, .. } => message,
        };
        f.write_str(message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let unauthorized = status == StatusCode::UNAUTHORIZED;

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        if unauthorized {
            return (
                status,
                [(header::WWW_AUTHENTICATE, r#"Basic realm="alias-shortener""#)],
                Json(body),
            )
                .into_response();
        }

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request is not valid", details)
    }
}

/// Maps storage outcomes onto HTTP errors.
///
/// Internal failures keep their cause out of the response body; handlers log
/// it before converting.
impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::AliasExists { alias } => {
                AppError::conflict("Alias already exists", json!({ "alias": alias }))
            }
            StorageError::NotFound { alias } => {
                AppError::not_found("Url not found for this alias", json!({ "alias": alias }))
            }
            StorageError::Database(_)
            | StorageError::Bootstrap { .. }
            | StorageError::Migration(_) => AppError::internal("Internal error", json!({})),
        }
    }
}
