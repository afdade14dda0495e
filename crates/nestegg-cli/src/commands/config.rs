//! Config command implementation.
//!
//! Shows and initializes the engine configuration file.

use anyhow::Result;
use clap::{Args, Subcommand};

use nestegg_engine::EngineConfig;

use crate::cli::OutputFormat;
use crate::commands::{default_config_path, Context};
use crate::output::{print_info, print_output, print_success, print_warning, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write a configuration file with default values
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Path => execute_path(ctx),
        ConfigCommand::Init(init_args) => execute_init(init_args, ctx),
    }
}

fn config_rows(config: &EngineConfig) -> Vec<KeyValue> {
    let analytics = &config.analytics;
    let mut rows = vec![
        KeyValue::new("price_timeout_ms", config.price_timeout_ms.to_string()),
        KeyValue::new("analytics.parallel", analytics.parallel.to_string()),
        KeyValue::new(
            "analytics.parallel_threshold",
            analytics.parallel_threshold.to_string(),
        ),
        KeyValue::new(
            "analytics.performance_rules",
            analytics.performance_rules.to_string(),
        ),
        KeyValue::new(
            "analytics.report_top_holdings",
            analytics.report_top_holdings.to_string(),
        ),
    ];

    let mut overrides: Vec<_> = analytics.sector_overrides.iter().collect();
    overrides.sort_by(|a, b| a.0.cmp(b.0));
    for (symbol, sector) in overrides {
        rows.push(KeyValue::new(
            format!("analytics.sector_overrides.{symbol}"),
            sector.to_string(),
        ));
    }
    rows
}

/// Show the effective configuration.
fn execute_show(ctx: &Context) -> Result<()> {
    let config = ctx.engine_config()?;

    match ctx.format {
        OutputFormat::Table => {
            ctx.header("Current Configuration");
            print_output(&config_rows(&config), ctx.format)?;
        }
        OutputFormat::Json => crate::output::print_json_value(&config)?,
        OutputFormat::Csv => print_output(&config_rows(&config), ctx.format)?,
        OutputFormat::Minimal => print!("{}", config.to_toml()?),
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(ctx: &Context) -> Result<()> {
    let path = match &ctx.config_path {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    if ctx.quiet || ctx.format == OutputFormat::Minimal {
        println!("{}", path.display());
        return Ok(());
    }

    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

/// Write a default configuration file.
fn execute_init(args: InitArgs, ctx: &Context) -> Result<()> {
    let path = match &ctx.config_path {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    if path.exists() && !args.force {
        print_warning(&format!(
            "{} already exists; use --force to overwrite",
            path.display()
        ));
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, EngineConfig::default().to_toml()?)?;

    if !ctx.quiet {
        print_success(&format!("Wrote {}", path.display()));
    }
    Ok(())
}
