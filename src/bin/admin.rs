//! CLI administration tool for short-link-service.
//!
//! Provides commands for inspecting links and statistics and for database
//! maintenance without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Apply migrations and verify the schema
//! cargo run --bin admin -- db migrate
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Inspect a single link
//! cargo run --bin admin -- link abc123
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//!   (plus optional `DB_SSLMODE`)

use short_link_service::config::{Config, mask_connection_string};
use short_link_service::domain::repositories::LinkRepository;
use short_link_service::infrastructure::persistence::{PgLinkRepository, schema};
use short_link_service::utils::code_generator::normalize_code;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing short-link-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show statistics
    Stats,

    /// Show a single link
    Link {
        /// Short code to look up
        code: String,
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
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply migrations and verify the schema
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url).await.with_context(|| {
        format!(
            "Failed to connect to database at {}",
            mask_connection_string(&database_url)
        )
    })?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Link { code } => handle_link(&pool, &code).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays aggregate statistics.
///
/// Shows:
/// - Total number of links
/// - Number of expired links
/// - Sum of all click counters
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    let expired_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE expires_at < NOW()")
            .fetch_one(pool)
            .await?;

    let clicks_total: i64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(click_count), 0)::BIGINT FROM urls")
            .fetch_one(pool)
            .await?;

    println!("  Links:   {}", links_count.to_string().bright_green().bold());
    println!("  Expired: {}", expired_count.to_string().yellow().bold());
    println!(
        "  Clicks:  {}",
        clicks_total.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Prints the stored record of one link, expired or not.
async fn handle_link(pool: &PgPool, code: &str) -> Result<()> {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));
    let code = normalize_code(code);

    let Some(link) = repo.find_by_code(&code).await? else {
        println!("{}", format!("❌ No link with code '{}'", code).red());
        return Ok(());
    };

    println!("{}", "🔗 Link".bright_blue().bold());
    println!();
    println!("  Code:     {}", link.short_code.cyan());
    println!("  URL:      {}", link.original_url.bright_white());
    println!(
        "  Clicks:   {}",
        link.click_count.to_string().bright_green().bold()
    );
    println!("  Created:  {}", link.created_at.format("%Y-%m-%d %H:%M:%S UTC"));

    match link.expires_at {
        Some(at) if link.is_expired() => println!(
            "  Expires:  {} {}",
            at.format("%Y-%m-%d %H:%M:%S UTC"),
            "(expired)".red()
        ),
        Some(at) => println!("  Expires:  {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
        None => println!("  Expires:  {}", "never".bright_black()),
    }
    println!();

    Ok(())
}

/// Handles database diagnostic and maintenance commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            schema::setup(pool)
                .await
                .context("Schema setup failed")?;

            println!(
                "{}",
                format!("✅ Schema ready, table '{}' present", schema::LINKS_TABLE)
                    .green()
                    .bold()
            );
        }
    }

    Ok(())
}
