use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Application-transaction harness tools
#[derive(Parser)]
#[command(name = "algo-app-harness")]
#[command(about = "Build, inspect and look up application transactions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Build (and optionally sign) an application transaction
    BuildApp(commands::build::BuildAppCommand),
    /// Decode a base64 msgpack transaction into JSON
    Decode(commands::decode::DecodeCommand),
    /// Query algod or indexer for assets and applications
    Lookup(commands::lookup::LookupCommand),
}

pub async fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::BuildApp(command) => command.run(),
        Commands::Decode(command) => command.run(),
        Commands::Lookup(command) => command.run().await,
    }
}
