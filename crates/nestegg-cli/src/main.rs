//! Nestegg CLI - Command-line interface for portfolio analytics.
//!
//! # Usage
//!
//! ```bash
//! # Analyze holdings, pricing them from a CSV file
//! nestegg analyze --holdings holdings.csv --prices prices.csv
//!
//! # Narrative report
//! nestegg analyze --holdings holdings.json --report
//!
//! # Project growth of 1000 plus 100/month at 7% for 10 years
//! nestegg project --initial 1000 --monthly 100 --years 10 --rate 7
//!
//! # Close a position and list realized gains
//! nestegg close --holdings holdings.json --transactions closed.json --id h1 --price 182.5
//! nestegg realized --transactions closed.json
//!
//! # Model allocation for a risk profile
//! nestegg allocation --profile 2
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

/// Installs the stderr log subscriber. `RUST_LOG` wins over the flags.
fn init_logging(verbose: u8, quiet: bool) {
    let default = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let ctx = Context {
        format: cli.format,
        quiet: cli.quiet,
        config_path: cli.config,
    };
    tracing::debug!(?ctx, "starting");

    // Execute command
    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, &ctx).await?,
        Commands::Project(args) => commands::project::execute(args, &ctx)?,
        Commands::Close(args) => commands::close::execute(args, &ctx).await?,
        Commands::Realized(args) => commands::realized::execute(args, &ctx).await?,
        Commands::Allocation(args) => commands::allocation::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}
