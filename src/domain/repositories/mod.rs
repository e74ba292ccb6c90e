//! Storage capability traits for the domain layer.
//!
//! The mapping store is exposed as three narrow capabilities, one per
//! operation. A caller depends only on the capability it uses, and tests can
//! substitute a `mockall` mock for any single one.
//!
//! # Available Capabilities
//!
//! - [`UrlSaver`] - Create a mapping
//! - [`UrlGetter`] - Resolve an alias to its target URL
//! - [`UrlDeleter`] - Remove a mapping
//! - [`MappingStore`] - All three, implemented for every type that has them
//!
//! # Testing
//!
//! See integration tests in `tests/repository_mapping.rs` for usage examples.

pub mod mapping_store;

pub use mapping_store::{MappingStore, UrlDeleter, UrlGetter, UrlSaver};

#[cfg(test)]
pub use mapping_store::{MockUrlDeleter, MockUrlGetter, MockUrlSaver};
