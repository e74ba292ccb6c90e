//! Application layer services implementing business logic.
//!
//! Services consume the domain storage capabilities and provide a clean API
//! for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Mapping creation, resolution and removal

pub mod services;
