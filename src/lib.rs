//! # Alias Shortener
//!
//! A small URL shortening service built with Axum and SQLite. Clients store a
//! long URL under a chosen or generated alias; visitors hitting the alias are
//! redirected to the URL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The mapping entity and storage capability traits
//! - **Application Layer** ([`application`]) - Alias selection and mapping orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite mapping store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Storage Contract
//!
//! The store exposes three operations, each behind its own trait:
//!
//! - create: fails with [`error::StorageError::AliasExists`] when the alias is taken
//! - get: fails with [`error::StorageError::NotFound`] for unknown aliases
//! - delete: fails with [`error::StorageError::NotFound`] when nothing was removed
//!
//! ## Quick Start
//!
//! ```bash
//! export HTTP_USER=admin HTTP_PASSWORD=secret
//! export STORAGE_PATH=./storage/storage.db
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, StorageError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::Mapping;
    pub use crate::domain::repositories::{MappingStore, UrlDeleter, UrlGetter, UrlSaver};
    pub use crate::error::{AppError, StorageError};
    pub use crate::infrastructure::persistence::SqliteMappingStore;
    pub use crate::state::AppState;
    pub use crate::utils::alias_generator::AliasGenerator;
}
