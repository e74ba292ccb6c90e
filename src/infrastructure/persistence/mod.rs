//! SQLite repository implementations.
//!
//! Concrete implementations of the domain storage capabilities using SQLx.
//!
//! # Repositories
//!
//! - [`SqliteMappingStore`] - Alias → URL mapping storage

pub mod sqlite_mapping_store;

pub use sqlite_mapping_store::SqliteMappingStore;
