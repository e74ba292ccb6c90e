//! SQLite implementation of the mapping store.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver};
use crate::error::StorageError;
use crate::utils::db_error::is_unique_violation;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite store for alias → URL mappings.
///
/// Uniqueness of aliases is enforced by the `url.alias` unique index, so
/// concurrent creators racing on one alias are arbitrated by the engine.
pub struct SqliteMappingStore {
    pool: Arc<SqlitePool>,
}

impl SqliteMappingStore {
    /// Creates a new store over an existing connection pool.
    ///
    /// The schema is not touched; call [`Self::bootstrap`] before use.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Opens the database at `database_url`, creating the file if it is
    /// missing, and applies the schema.
    ///
    /// File databases run in WAL mode so readers are not blocked by a writer.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Bootstrap`] if the database cannot be opened
    /// and [`StorageError::Migration`] if the schema cannot be created.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let bootstrap_error = |source| StorageError::Bootstrap {
            path: database_url.to_string(),
            source,
        };

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(bootstrap_error)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(bootstrap_error)?;

        let store = Self::new(Arc::new(pool));
        store.bootstrap().await?;

        Ok(store)
    }

    /// Creates the `url` table and its indexes if they are absent.
    pub async fn bootstrap(&self) -> Result<(), StorageError> {
        sqlx::migrate!("./migrations").run(self.pool.as_ref()).await?;
        Ok(())
    }

    /// Runs a trivial query to check the database is reachable.
    pub async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }

    /// Counts stored mappings.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl UrlSaver for SqliteMappingStore {
    async fn save_url(&self, target_url: &str, alias: &str) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(target_url)
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StorageError::AliasExists {
                        alias: alias.to_string(),
                    }
                } else {
                    StorageError::Database(e)
                }
            })?;

        Ok(result.last_insert_rowid())
    }
}

#[async_trait]
impl UrlGetter for SqliteMappingStore {
    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| StorageError::NotFound {
                alias: alias.to_string(),
            })
    }
}

#[async_trait]
impl UrlDeleter for SqliteMappingStore {
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                alias: alias.to_string(),
            });
        }

        Ok(())
    }
}
