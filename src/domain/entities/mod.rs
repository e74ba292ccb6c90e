//! Core domain entities.
//!
//! - [`Mapping`] - A stored alias to target URL binding

pub mod mapping;

pub use mapping::Mapping;
