//! CLI administration tool for linkcut.
//!
//! Creates and inspects short links and checks the database without going
//! through the HTTP interface.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://example.com/very/long
//!
//! # Show a stored link
//! cargo run --bin admin -- show k3x9a0q
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`), see
//! [`linkcut::config`].

use linkcut::application::services::LinkService;
use linkcut::config;
use linkcut::infrastructure::persistence::PgUrlRepository;
use linkcut::server::{connect_pool, run_migrations};
use linkcut::AppError;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing linkcut.
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
    /// Create a short link
    Shorten {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,

        /// Public origin used to print the short URL
        #[arg(long, default_value = "http://localhost:8081")]
        base_url: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show a stored link without counting a visit
    Show {
        /// Short code
        code: String,
    },

    /// Show statistics
    Stats,

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

    /// Apply pending migrations
    Migrate,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Shorten { url, base_url, yes } => shorten(&pool, url, &base_url, yes).await?,
        Commands::Show { code } => show(&pool, &code).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn link_service(pool: &PgPool) -> LinkService<PgUrlRepository> {
    LinkService::new(Arc::new(PgUrlRepository::new(Arc::new(pool.clone()))))
}

/// Creates a short link with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for the URL (or use the provided one)
/// 2. Confirm (unless `--yes`)
/// 3. Generate a collision-checked code and store the link
/// 4. Print the short URL
async fn shorten(pool: &PgPool, url: Option<String>, base_url: &str, yes: bool) -> Result<()> {
    println!("{}", "✂️  Shorten URL".bright_blue().bold());
    println!();

    let long_url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Long URL")
            .interact_text()?,
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Shorten {}?", long_url))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = link_service(pool);
    let code = service
        .create_short_link(&long_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create short link: {}", e))?;

    println!();
    println!("{}", "✅ Short link created!".green().bold());
    println!("  Code:  {}", code.cyan());
    println!(
        "  URL:   {}",
        service.get_short_url(base_url, &code).bright_yellow().bold()
    );
    println!();

    Ok(())
}

/// Prints one stored link.
async fn show(pool: &PgPool, code: &str) -> Result<()> {
    let record = match link_service(pool).get_record(code).await {
        Ok(record) => record,
        Err(AppError::NotFound(_)) => {
            println!("{}", format!("⚠️  No link with code '{}'", code).yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("{}", "🔗 Link".bright_blue().bold());
    println!();
    println!("  ID:        {}", record.id.to_string().bright_black());
    println!("  Code:      {}", record.short_code.cyan());
    println!("  Long URL:  {}", record.long_url.bright_white());
    println!(
        "  Followed:  {}",
        record.times_followed.to_string().bright_green().bold()
    );
    println!(
        "  Created:   {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Displays link count and total follows.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repo = PgUrlRepository::new(Arc::new(pool.clone()));
    let links = repo.count().await.context("Failed to count links")?;
    let follows = repo
        .total_follows()
        .await
        .context("Failed to sum follows")?;

    println!("  Links:    {}", links.to_string().bright_green().bold());
    println!("  Follows:  {}", follows.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🛠️  Applying migrations...".bright_blue());

            run_migrations(pool).await?;

            println!("{}", "✅ Schema is up to date".green().bold());
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
    }

    Ok(())
}
