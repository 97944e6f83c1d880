//! Pitchside CLI - command line tool for the shop.
//!
//! Commands:
//! - `pitchside seed` - Seed the demo catalog and admin account
//! - `pitchside catalog` - Print the demo catalog
//! - `pitchside config` - Show the resolved configuration

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ConfigArgs, SeedArgs};

/// Pitchside CLI - inspect and seed the football shop
#[derive(Parser)]
#[command(name = "pitchside")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the demo catalog and admin account
    Seed(SeedArgs),

    /// Print the demo catalog
    Catalog(CatalogArgs),

    /// Show the resolved configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let result = match cli.command {
        Commands::Seed(args) => commands::seed::run(args, &output).await,
        Commands::Catalog(args) => commands::catalog::run(args, &output).await,
        Commands::Config(args) => commands::config::run(args, &output).await,
    };

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
