//! CLI administration tool for alias-shortener.
//!
//! Manages mappings directly in the database without going through the HTTP
//! API.
//!
//! # Usage
//!
//! ```bash
//! # Store a mapping under a generated alias
//! cargo run --bin admin -- create https://example.com
//!
//! # Store a mapping under a chosen alias
//! cargo run --bin admin -- create https://example.com --alias shop
//!
//! # Look up an alias
//! cargo run --bin admin -- get shop
//!
//! # Delete an alias
//! cargo run --bin admin -- delete shop
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `STORAGE_PATH`: SQLite database location

use alias_shortener::api::dto::save::SaveRequest;
use alias_shortener::application::services::LinkService;
use alias_shortener::config::Config;
use alias_shortener::error::StorageError;
use alias_shortener::infrastructure::persistence::SqliteMappingStore;
use alias_shortener::utils::alias_generator::{
    AliasGenerator, DEFAULT_ALIAS_LENGTH, validate_custom_alias,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Store a mapping
    Create {
        /// Target URL
        url: String,

        /// Alias to use (generated if not provided)
        #[arg(short, long)]
        alias: Option<String>,

        /// Length of a generated alias
        #[arg(short, long, default_value_t = DEFAULT_ALIAS_LENGTH)]
        length: usize,

        /// Tries for a generated alias before giving up
        #[arg(long, default_value_t = 1)]
        attempts: usize,
    },

    /// Show the target URL of an alias
    Get {
        alias: String,
    },

    /// Delete a mapping
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and schema
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url();
    let store = SqliteMappingStore::connect(&database_url, 1)
        .await
        .with_context(|| format!("Failed to open {}", database_url))?;
    let store = Arc::new(store);

    match cli.command {
        Commands::Create {
            url,
            alias,
            length,
            attempts,
        } => {
            let alias = check_create_args(&url, alias)?;
            let service = LinkService::new(store, AliasGenerator::new(length), attempts);
            create_mapping(&service, &url, alias.as_deref()).await?
        }
        Commands::Get { alias } => {
            let service = LinkService::new(store, AliasGenerator::default(), 1);
            get_mapping(&service, &alias).await?
        }
        Commands::Delete { alias, yes } => {
            let service = LinkService::new(store, AliasGenerator::default(), 1);
            delete_mapping(&service, &alias, yes).await?
        }
        Commands::Db { action } => match action {
            DbAction::Check => check_db(&store, &database_url).await?,
        },
    }

    Ok(())
}

/// Applies the same URL and alias rules as `POST /url`.
///
/// Returns the alias to store, `None` when one should be generated.
fn check_create_args(url: &str, alias: Option<String>) -> Result<Option<String>> {
    let request = SaveRequest {
        url: url.to_string(),
        alias,
    };
    request.validate().context("Invalid mapping")?;

    let alias = request.alias.filter(|a| !a.is_empty());
    if let Some(alias) = &alias {
        validate_custom_alias(alias).context("Invalid alias")?;
    }

    Ok(alias)
}

/// Stores a mapping and prints the alias it was stored under.
async fn create_mapping(
    service: &LinkService<SqliteMappingStore>,
    url: &str,
    alias: Option<&str>,
) -> Result<()> {
    println!("{}", "🔗 Create Mapping".bright_blue().bold());
    println!();

    match service.create(url, alias).await {
        Ok(mapping) => {
            println!("{}", "✅ Mapping created".green().bold());
            println!("  Alias: {}", mapping.alias.bright_yellow().bold());
            println!("  URL:   {}", mapping.target_url.cyan());
            println!("  ID:    {}", mapping.id.to_string().bright_black());
            println!();
            Ok(())
        }
        Err(StorageError::AliasExists { alias }) => {
            println!("{}", format!("⚠️  Alias '{}' already exists", alias).yellow());
            anyhow::bail!("alias already exists")
        }
        Err(e) => Err(e).context("Failed to create mapping"),
    }
}

/// Prints the target URL bound to an alias.
async fn get_mapping(service: &LinkService<SqliteMappingStore>, alias: &str) -> Result<()> {
    match service.resolve(alias).await {
        Ok(url) => {
            println!("  {} → {}", alias.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(StorageError::NotFound { .. }) => {
            println!("{}", format!("  No url found for alias '{}'", alias).yellow());
            anyhow::bail!("alias not found")
        }
        Err(e) => Err(e).context("Failed to look up alias"),
    }
}

/// Deletes a mapping after confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is given
async fn delete_mapping(
    service: &LinkService<SqliteMappingStore>,
    alias: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑️  Delete Mapping".bright_blue().bold());
    println!();

    let url = match service.resolve(alias).await {
        Ok(url) => url,
        Err(StorageError::NotFound { .. }) => {
            println!("{}", format!("⚠️  No url found for alias '{}'", alias).yellow());
            anyhow::bail!("alias not found")
        }
        Err(e) => return Err(e).context("Failed to look up alias"),
    };

    println!("  Alias: {}", alias.bright_yellow());
    println!("  URL:   {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(alias)
        .await
        .context("Failed to delete mapping")?;

    println!();
    println!("{}", "✅ Mapping deleted".green().bold());
    println!();

    Ok(())
}

/// Checks connectivity and prints the number of stored mappings.
async fn check_db(store: &SqliteMappingStore, database_url: &str) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());

    store.ping().await.context("Database is not reachable")?;
    let count = store.count().await.context("Failed to count mappings")?;

    println!("{}", "✅ Database connection successful".green().bold());
    println!("  Database: {}", database_url.cyan());
    println!("  Mappings: {}", count.to_string().bright_white().bold());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_create_args_accepts_valid_input() {
        let alias = check_create_args("https://example.com", Some("shop".to_string())).unwrap();
        assert_eq!(alias.as_deref(), Some("shop"));
    }

    #[test]
    fn test_check_create_args_empty_alias_is_generated() {
        assert_eq!(check_create_args("https://example.com", None).unwrap(), None);
        assert_eq!(
            check_create_args("https://example.com", Some(String::new())).unwrap(),
            None
        );
    }

    #[test]
    fn test_check_create_args_rejects_reserved_alias() {
        assert!(check_create_args("https://example.com", Some("health".to_string())).is_err());
        assert!(check_create_args("https://example.com", Some("url".to_string())).is_err());
    }

    #[test]
    fn test_check_create_args_rejects_bad_alias_characters() {
        assert!(check_create_args("https://example.com", Some("a/b".to_string())).is_err());
        assert!(check_create_args("https://example.com", Some("my alias".to_string())).is_err());
    }

    #[test]
    fn test_check_create_args_rejects_bad_url() {
        assert!(check_create_args("", None).is_err());
        assert!(check_create_args("not a url", None).is_err());
    }
}
