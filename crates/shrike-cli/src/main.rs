//! shrike CLI entry point.
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Trigger-based filtering for news feed items.
///
/// Interprets trigger configuration files and filters batches of feed
/// entries against them.
#[derive(Parser, Debug)]
#[command(name = "shrike", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Filter a batch of feed entries through a trigger configuration.
    Run(shrike_cli::run::RunArgs),
    /// Parse a trigger configuration and describe its contents.
    Validate(shrike_cli::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => shrike_cli::run::run(args),
        Commands::Validate(args) => shrike_cli::validate::run(args),
    }
}
