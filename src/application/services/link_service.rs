//! Mapping creation, resolution and removal.

use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver};
use crate::error::StorageError;
use crate::utils::alias_generator::AliasGenerator;

/// Service coordinating the alias generator and the mapping store.
///
/// Each operation is only available when the store provides the capability
/// it needs, so a service over a [`UrlGetter`] alone can resolve but not
/// create.
pub struct LinkService<S> {
    store: Arc<S>,
    generator: AliasGenerator,
    alias_attempts: usize,
}

impl<S> LinkService<S> {
    /// Creates a new link service.
    ///
    /// `alias_attempts` is the total number of tries for a generated alias;
    /// `1` means a collision is reported without regenerating.
    pub fn new(store: Arc<S>, generator: AliasGenerator, alias_attempts: usize) -> Self {
        Self {
            store,
            generator,
            alias_attempts: alias_attempts.max(1),
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

impl<S: UrlSaver> LinkService<S> {
    /// Stores a mapping for `target_url`.
    ///
    /// # Alias Selection
    ///
    /// - A non-empty `alias` is stored as given; a conflict is returned at once
    /// - Otherwise a random alias is generated. On collision a new one is
    ///   generated, up to `alias_attempts` tries in total
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if the alias is taken (for a
    /// generated alias, after the last attempt).
    /// Returns [`StorageError::Database`] on database errors.
    pub async fn create(
        &self,
        target_url: &str,
        alias: Option<&str>,
    ) -> Result<Mapping, StorageError> {
        if let Some(alias) = alias.filter(|a| !a.is_empty()) {
            let id = self.store.save_url(target_url, alias).await?;
            return Ok(Mapping::new(id, alias.to_string(), target_url.to_string()));
        }

        let mut attempt = 1;
        loop {
            let alias = self.generator.generate();

            match self.store.save_url(target_url, &alias).await {
                Ok(id) => return Ok(Mapping::new(id, alias, target_url.to_string())),
                Err(StorageError::AliasExists { alias }) if attempt < self.alias_attempts => {
                    tracing::debug!(%alias, attempt, "Generated alias collided, regenerating");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl<S: UrlGetter> LinkService<S> {
    /// Returns the target URL bound to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no mapping exists.
    pub async fn resolve(&self, alias: &str) -> Result<String, StorageError> {
        self.store.get_url(alias).await
    }
}

impl<S: UrlDeleter> LinkService<S> {
    /// Removes the mapping bound to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no mapping exists, including
    /// when it was already deleted.
    pub async fn delete(&self, alias: &str) -> Result<(), StorageError> {
        self.store.delete_url(alias).await
    }
}
