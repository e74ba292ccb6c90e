//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Storage
//!
//! ```bash
//! # Either a full SQLx URL
//! export DATABASE_URL="sqlite://./storage/storage.db"
//!
//! # or a plain file path
//! export STORAGE_PATH="./storage/storage.db"
//! ```
//!
//! If `DATABASE_URL` is not set, it is built from `STORAGE_PATH`
//! (default: `./storage/storage.db`).
//!
//! ## Required Variables
//!
//! - `HTTP_USER` / `HTTP_PASSWORD` - Basic auth credentials for `/url` routes
//!
//! ## Optional Variables
//!
//! - `APP_ENV` - `local`, `dev` or `prod` (default: `local`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8082`)
//! - `HTTP_TIMEOUT` - Request timeout in seconds (default: 4)
//! - `RUST_LOG` - Log filter (default: `debug`, or `info` in `prod`)
//! - `LOG_FORMAT` - `text` or `json` (default: `text` in `local`, `json` otherwise)
//! - `ALIAS_LENGTH` - Length of generated aliases (default: 6)
//! - `ALIAS_ATTEMPTS` - Tries for a generated alias before reporting a
//!   conflict (default: 1, no regeneration)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 5)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::utils::alias_generator::MAX_ALIAS_LENGTH;

/// Deployment environment, selecting logging defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Local,
    Dev,
    Prod,
}

impl AppEnv {
    fn default_log_level(self) -> &'static str {
        match self {
            AppEnv::Local | AppEnv::Dev => "debug",
            AppEnv::Prod => "info",
        }
    }

    fn default_log_format(self) -> &'static str {
        match self {
            AppEnv::Local => "text",
            AppEnv::Dev | AppEnv::Prod => "json",
        }
    }
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(AppEnv::Local),
            "dev" => Ok(AppEnv::Dev),
            "prod" => Ok(AppEnv::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppEnv::Local => "local",
            AppEnv::Dev => "dev",
            AppEnv::Prod => "prod",
        };
        f.write_str(name)
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: AppEnv,
    pub database_url: String,
    pub listen_addr: String,
    /// Per-request timeout in seconds (`HTTP_TIMEOUT`).
    pub http_timeout_seconds: u64,
    pub auth_user: String,
    pub auth_password: String,
    pub log_level: String,
    pub log_format: String,
    /// Length of generated aliases (`ALIAS_LENGTH`).
    pub alias_length: usize,
    /// Total tries for a generated alias before a conflict is reported
    /// (`ALIAS_ATTEMPTS`). `1` disables regeneration.
    pub alias_attempts: usize,
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if basic auth credentials are missing or `APP_ENV`
    /// is not recognised.
    pub fn from_env() -> Result<Self> {
        let env = match env::var("APP_ENV") {
            Ok(v) => v.parse()?,
            Err(_) => AppEnv::Local,
        };

        let database_url = Self::load_database_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8082".to_string());

        let http_timeout_seconds = parse_var("HTTP_TIMEOUT").unwrap_or(4);

        let auth_user = env::var("HTTP_USER").context("HTTP_USER must be set")?;
        let auth_password = env::var("HTTP_PASSWORD").context("HTTP_PASSWORD must be set")?;

        let log_level =
            env::var("RUST_LOG").unwrap_or_else(|_| env.default_log_level().to_string());
        let log_format =
            env::var("LOG_FORMAT").unwrap_or_else(|_| env.default_log_format().to_string());

        let alias_length = parse_var("ALIAS_LENGTH").unwrap_or(6);
        let alias_attempts = parse_var("ALIAS_ATTEMPTS").unwrap_or(1);
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS").unwrap_or(5);

        Ok(Self {
            env,
            database_url,
            listen_addr,
            http_timeout_seconds,
            auth_user,
            auth_password,
            log_level,
            log_format,
            alias_length,
            alias_attempts,
            db_max_connections,
        })
    }

    /// Loads the database URL.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `sqlite://` + `STORAGE_PATH`
    /// 3. `sqlite://./storage/storage.db`
    pub fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let path = env::var("STORAGE_PATH").unwrap_or_else(|_| "./storage/storage.db".to_string());
        format!("sqlite://{}", path)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
    /// - alias, timeout or pool settings are out of range
    /// - basic auth credentials are empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.alias_length == 0 || self.alias_length > MAX_ALIAS_LENGTH {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 1 and {}, got {}",
                MAX_ALIAS_LENGTH,
                self.alias_length
            );
        }

        if self.alias_attempts == 0 || self.alias_attempts > 16 {
            anyhow::bail!(
                "ALIAS_ATTEMPTS must be between 1 and 16, got {}",
                self.alias_attempts
            );
        }

        if self.http_timeout_seconds == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        if self.auth_user.is_empty() || self.auth_password.is_empty() {
            anyhow::bail!("HTTP_USER and HTTP_PASSWORD must not be empty");
        }

        Ok(())
    }

    /// Returns the database file path, or `None` for in-memory databases.
    pub fn storage_file_path(&self) -> Option<PathBuf> {
        let rest = self
            .database_url
            .strip_prefix("sqlite://")
            .or_else(|| self.database_url.strip_prefix("sqlite:"))?;

        let path = rest.split('?').next().unwrap_or(rest);
        if path.is_empty() || path == ":memory:" {
            return None;
        }

        Some(PathBuf::from(path))
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Request timeout: {}s", self.http_timeout_seconds);
        tracing::info!("  Auth: user '{}', password ***", self.auth_user);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Aliases: length {}, attempts {}",
            self.alias_length,
            self.alias_attempts
        );
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
