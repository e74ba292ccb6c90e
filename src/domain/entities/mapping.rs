//! Mapping entity binding an alias to its target URL.

/// A stored alias → target URL binding.
///
/// `alias` and `target_url` never change after creation. `id` is assigned by
/// the store in insertion order and is not used for lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: i64,
    pub alias: String,
    pub target_url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(id: i64, alias: String, target_url: String) -> Self {
        Self {
            id,
            alias,
            target_url,
        }
    }
}
