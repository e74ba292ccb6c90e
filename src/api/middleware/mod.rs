//! HTTP middleware for request processing and protection.
//!
//! Provides basic authentication and observability middleware.

pub mod auth;
pub mod tracing;
