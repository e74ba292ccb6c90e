//! DTOs for the save endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom alias validation.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

/// Request to store a mapping.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The target URL (must be a valid URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional alias; a random one is generated when absent or empty.
    #[serde(default)]
    #[validate(length(max = 64))]
    #[validate(regex(path = "*ALIAS_REGEX"))]
    pub alias: Option<String>,
}

/// Response for a stored mapping.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub status: String,
    pub alias: String,
    pub url: String,
}

impl SaveResponse {
    pub fn ok(alias: String, url: String) -> Self {
        Self {
            status: "OK".to_string(),
            alias,
            url,
        }
    }
}

/// Response for operations without a payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str, alias: Option<&str>) -> SaveRequest {
        SaveRequest {
            url: url.to_string(),
            alias: alias.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("https://example.com", Some("shop")).validate().is_ok());
        assert!(request("https://example.com", None).validate().is_ok());
        assert!(request("https://example.com", Some("")).validate().is_ok());
    }

    #[test]
    fn test_invalid_url() {
        assert!(request("not a url", None).validate().is_err());
    }

    #[test]
    fn test_invalid_alias_characters() {
        assert!(request("https://example.com", Some("a b")).validate().is_err());
        assert!(request("https://example.com", Some("a/b")).validate().is_err());
    }

    #[test]
    fn test_alias_too_long() {
        let alias = "a".repeat(65);
        assert!(request("https://example.com", Some(&alias)).validate().is_err());
    }

    #[test]
    fn test_alias_defaults_to_none() {
        let req: SaveRequest = serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();
        assert!(req.alias.is_none());
    }
}
