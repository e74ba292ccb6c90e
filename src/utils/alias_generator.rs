//! Alias generation and validation utilities.
//!
//! Generated aliases carry no uniqueness guarantee. Collisions are detected by
//! the mapping store's unique index and surface as
//! [`crate::error::StorageError::AliasExists`].

use crate::error::AppError;
use serde_json::json;
use std::iter;

/// Symbols a generated alias is drawn from.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated aliases when none is configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Longest alias accepted from callers.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases that would be shadowed by service routes.
const RESERVED_ALIASES: &[&str] = &["health", "url"];

/// Generates a random alias of exactly `length` characters.
///
/// Each character is drawn independently and uniformly from `[A-Za-z0-9]`.
///
/// # Examples
///
/// ```ignore
/// let alias = random_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn random_alias(length: usize) -> String {
    iter::repeat_with(|| ALPHABET[rand::random_range(0..ALPHABET.len())] as char)
        .take(length)
        .collect()
}

/// Random alias generator with a fixed output length.
#[derive(Debug, Clone, Copy)]
pub struct AliasGenerator {
    length: usize,
}

impl AliasGenerator {
    /// Creates a generator producing aliases of `length` characters.
    ///
    /// A zero length is raised to one.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.max(1),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn generate(&self) -> String {
        random_alias(self.length)
    }
}

impl Default for AliasGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ALIAS_LENGTH)
    }
}

/// Rejects aliases that would be shadowed by service routes.
///
/// Character set and length are checked by the request validators before
/// this runs.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for a reserved alias.
pub fn validate_custom_alias(alias: &str) -> Result<(), AppError> {
    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_alias_has_requested_length() {
        for size in [1, 5, 6, 10, 20, 30] {
            assert_eq!(random_alias(size).len(), size);
        }
    }

    #[test]
    fn test_random_alias_alphabet() {
        let alias = random_alias(500);
        assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_alias_zero_length_is_empty() {
        assert!(random_alias(0).is_empty());
    }

    #[test]
    fn test_consecutive_aliases_differ() {
        for size in [5, 10, 20, 30] {
            let first = random_alias(size);
            let second = random_alias(size);
            assert_ne!(first, second, "generated equal aliases: {}", first);
        }
    }

    #[test]
    fn test_single_char_aliases_are_not_constant() {
        let seen: HashSet<String> = (0..200).map(|_| random_alias(1)).collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_random_alias_covers_alphabet() {
        let seen: HashSet<char> = random_alias(20_000).chars().collect();
        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn test_generator_uses_configured_length() {
        let generator = AliasGenerator::new(8);
        assert_eq!(generator.length(), 8);
        assert_eq!(generator.generate().len(), 8);
    }

    #[test]
    fn test_generator_default_length() {
        assert_eq!(AliasGenerator::default().generate().len(), 6);
    }

    #[test]
    fn test_generator_zero_length_raised() {
        assert_eq!(AliasGenerator::new(0).length(), 1);
    }

    #[test]
    fn test_validate_plain_alias() {
        assert!(validate_custom_alias("shop").is_ok());
        assert!(validate_custom_alias("My_Link-2024").is_ok());
    }

    #[test]
    fn test_validate_reserved_aliases() {
        for &reserved in RESERVED_ALIASES {
            assert!(
                validate_custom_alias(reserved).is_err(),
                "Reserved alias '{}' should be invalid",
                reserved
            );
        }
    }

    #[test]
    fn test_validate_is_case_sensitive_for_reserved() {
        assert!(validate_custom_alias("Health").is_ok());
    }
}
