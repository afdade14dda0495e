//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{
    AllocationArgs, AnalyzeArgs, CloseArgs, ConfigArgs, ProjectArgs, RealizedArgs,
};

/// Nestegg - Personal portfolio analytics and growth projection
#[derive(Parser)]
#[command(name = "nestegg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Engine configuration file (TOML)
    #[arg(short, long, global = true, env = "NESTEGG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze holdings: value, weights, sectors, risk and recommendations
    Analyze(AnalyzeArgs),

    /// Project portfolio growth under monthly compounding
    Project(ProjectArgs),

    /// Close a position and record the realized transaction
    Close(CloseArgs),

    /// Summarize realized gains from closed positions
    Realized(RealizedArgs),

    /// Show model stock/bond/cash allocations by risk profile
    Allocation(AllocationArgs),

    /// Inspect the engine configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}
