//! Arcline CLI - Remote store management tools.
//!
//! # Usage
//!
//! ```bash
//! # Push the embedded rental catalog into the remote store
//! arcline-cli seed catalog
//!
//! # Seed everything (catalog, brands, gallery, settings)
//! arcline-cli seed all
//! ```
//!
//! # Commands
//!
//! - `seed` - Push the embedded default data into the remote store.
//!   Requires `STORE_SERVICE_KEY` in the environment; the public anon
//!   key cannot write.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "arcline-cli")]
#[command(author, version, about = "Arcline CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the remote store with the embedded default data
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// The 7-item rental catalog
    Catalog,
    /// The authorized-service brand list
    Brands,
    /// The bundled workshop photos
    Gallery,
    /// Default hero and contact documents
    Settings,
    /// Everything above, in order
    All,
}

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "arcline_cli=info,arcline_store=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed { target } => match target {
            SeedTarget::Catalog => commands::seed::catalog().await,
            SeedTarget::Brands => commands::seed::brands().await,
            SeedTarget::Gallery => commands::seed::gallery().await,
            SeedTarget::Settings => commands::seed::settings().await,
            SeedTarget::All => commands::seed::all().await,
        },
    };

    if let Err(error) = result {
        tracing::error!("Command failed: {error}");
        std::process::exit(1);
    }
}
