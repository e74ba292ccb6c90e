//! Capability traits for alias → URL mapping storage.

use crate::error::StorageError;
use async_trait::async_trait;

/// Creates mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingStore`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Inserts a mapping and returns its newly assigned id.
    ///
    /// The insert is a single statement: either the row and its uniqueness
    /// check both succeed, or nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if `alias` is already bound.
    /// Returns [`StorageError::Database`] on any other database error.
    async fn save_url(&self, target_url: &str, alias: &str) -> Result<i64, StorageError>;
}

/// Resolves aliases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlGetter: Send + Sync {
    /// Returns the target URL bound to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no mapping exists.
    /// Returns [`StorageError::Database`] on database errors.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;
}

/// Removes mappings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlDeleter: Send + Sync {
    /// Deletes the mapping bound to `alias`.
    ///
    /// Not idempotent: a second call for the same alias fails.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no row was affected.
    /// Returns [`StorageError::Database`] on database errors.
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError>;
}

/// A store offering every mapping capability.
pub trait MappingStore: UrlSaver + UrlGetter + UrlDeleter {}

impl<T> MappingStore for T where T: UrlSaver + UrlGetter + UrlDeleter {}
