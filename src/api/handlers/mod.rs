//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod delete;
pub mod health;
pub mod redirect;
pub mod save;

pub use delete::delete_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use save::save_handler;

use crate::error::StorageError;

/// Logs a storage failure at a level matching its kind.
///
/// Conflicts and missing aliases are normal outcomes and log at `INFO`;
/// everything else is an internal failure and logs at `ERROR` with its cause.
fn log_storage_error(op: &'static str, err: &StorageError) {
    if err.is_expected() {
        tracing::info!(op, error = %err, "Request rejected");
    } else {
        tracing::error!(op, error = ?err, "Storage failure");
    }
}
