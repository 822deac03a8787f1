use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::registry::{Registries, RegistryOverlay};

pub mod commands;

/// EVM Transaction Protocol Classifier
#[derive(Parser)]
#[command(name = "txlabel")]
#[command(about = "EVM Transaction Protocol Classifier")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Classify a single transaction/receipt JSON record
    Classify(commands::classify::ClassifyCommand),
    /// Classify a JSON Lines stream of records and print a summary breakdown
    Batch(commands::batch::BatchCommand),
    /// Inspect and validate the signal registries
    Registry(commands::registry::RegistryCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "info" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify(command) => command.run(),
        Commands::Batch(command) => command.run(),
        Commands::Registry(command) => command.run(),
    }
}

/// Build the shared registries from configuration.
///
/// A registry fault here is fatal by design: no classification command may
/// run against a partially loaded registry.
pub fn build_registries(config: &AppConfig) -> AppResult<Arc<Registries>> {
    let registries = match &config.registry.overlay {
        Some(path) => {
            let overlay = RegistryOverlay::from_file(path)?;
            Registries::with_overlay(&overlay)?
        }
        None => Registries::builtin()?,
    };
    Ok(Arc::new(registries))
}
