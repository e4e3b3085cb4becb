//! Operational command runner for Cactus.
//!
//! Runs one named command against the production or staging database.
//!
//! # Usage
//!
//! ```bash
//! # List available commands
//! cargo run --bin scripts -- --list
//!
//! # Run a command against staging
//! cargo run --bin scripts -- active-users --env stage
//!
//! # Pick the environment and command interactively
//! cargo run --bin scripts
//! ```
//!
//! # Environment Variables
//!
//! - `PROD_DATABASE_URL` / `STAGE_DATABASE_URL`: per-environment connection strings
//! - `DATABASE_URL`: fallback when the per-environment variable is unset
//! - `RUST_LOG`: command log level (default: `info`)

use cactus::config::{Config, Environment};
use cactus::infrastructure::persistence::{
    MemoryAnalyticsWarehouse, MemoryDocumentStore, PgAnalyticsWarehouse, PgDocumentStore,
};
use cactus::logging::{self, NullLogger, TracingLogger};
use cactus::scripts::{CommandRegistry, default_registry};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::{Confirm, Select};
use sqlx::PgPool;
use std::sync::Arc;

/// Run Cactus operational commands.
#[derive(Parser)]
#[command(name = "scripts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command to run, e.g. `active-users`
    command: Option<String>,

    /// Target environment
    #[arg(long, value_enum)]
    env: Option<Environment>,

    /// List available commands and exit
    #[arg(long)]
    list: bool,

    /// Skip the confirmation prompt for production runs
    #[arg(long, short = 'y')]
    yes: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "❌ Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if cli.list {
        return list_commands();
    }

    let environment = match cli.env {
        Some(env) => env,
        None => prompt_environment()?,
    };

    let command = match cli.command {
        Some(name) => name,
        None => prompt_command()?,
    };

    if !listing_registry()?.validate_command_exists(&command) {
        anyhow::bail!(
            "Unknown command '{}'. Run with --list to see available commands",
            command
        );
    }

    if environment == Environment::Prod && !cli.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Run '{}' against Prod?", command))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    logging::init_tracing(&log_level, "text");

    let database_url = Config::database_url_for(environment)?;
    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| format!("Failed to connect to {} database", environment))?;
    let pool = Arc::new(pool);

    let registry = default_registry(
        Arc::new(PgDocumentStore::new(pool.clone())),
        Arc::new(PgAnalyticsWarehouse::new(pool)),
        TracingLogger::shared("scripts"),
    )?;

    println!(
        "{} {} {}",
        "▶ Running".bright_blue().bold(),
        command.bright_white().bold(),
        format!("({})", environment).bright_black()
    );

    registry.run(&command).await?;

    println!("{}", "✅ Done".green().bold());
    Ok(())
}

/// Registry used for listing and name checks; its backends are never touched.
fn listing_registry() -> Result<CommandRegistry> {
    Ok(default_registry(
        Arc::new(MemoryDocumentStore::new()),
        Arc::new(MemoryAnalyticsWarehouse::new()),
        Arc::new(NullLogger),
    )?)
}

fn list_commands() -> Result<()> {
    let registry = listing_registry()?;

    println!("{}", "📋 Commands".bright_blue().bold());
    println!();
    for command in registry.iter() {
        println!(
            "  {:<22} {}",
            command.name().bright_cyan(),
            command.description()
        );
    }
    println!();

    Ok(())
}

fn prompt_environment() -> Result<Environment> {
    let labels: Vec<String> = Environment::ALL.iter().map(|e| e.to_string()).collect();
    let selection = Select::new()
        .with_prompt("Environment")
        .items(&labels)
        .default(1)
        .interact()?;

    Ok(Environment::ALL[selection])
}

fn prompt_command() -> Result<String> {
    let names = listing_registry()?.get_all_commands();
    let selection = Select::new()
        .with_prompt("Command")
        .items(&names)
        .default(0)
        .interact()?;

    Ok(names[selection].to_string())
}
