//! Infrastructure layer for external integrations.
//!
//! This layer implements the storage capabilities defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite mapping store

pub mod persistence;
