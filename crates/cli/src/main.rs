//! Skateshop CLI - Database migrations and demo data.
//!
//! # Usage
//!
//! ```bash
//! # Run storefront database migrations
//! skateshop-cli migrate
//!
//! # Create demo stores and products
//! skateshop-cli seed --owner user_123
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Create demo stores with products

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "skateshop-cli")]
#[command(author, version, about = "Skateshop CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run storefront database migrations
    Migrate,
    /// Create demo stores and products
    Seed {
        /// User ID that will own the demo stores
        #[arg(short, long, default_value = commands::seed::DEFAULT_OWNER)]
        owner: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::storefront().await?,
        Commands::Seed { owner } => commands::seed::demo_stores(&owner).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_seed_owner_default() {
        let cli = Cli::try_parse_from(["skateshop-cli", "seed"]).unwrap_or_else(|e| panic!("{e}"));
        let Commands::Seed { owner } = cli.command else {
            panic!("expected seed command");
        };
        assert_eq!(owner, commands::seed::DEFAULT_OWNER);
    }
}
