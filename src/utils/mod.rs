//! Utility functions for alias generation and database error handling.
//!
//! - [`alias_generator`] - Random alias generation and custom alias validation
//! - [`db_error`] - Classification of SQLx errors

pub mod alias_generator;
pub mod db_error;
