//! Domain layer containing the mapping entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Capability traits implemented by the infrastructure layer
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Storage capabilities are split into narrow traits so a caller only
//!   depends on the operation it needs
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
