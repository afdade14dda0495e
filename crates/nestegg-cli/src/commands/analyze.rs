//! Analyze command implementation.
//!
//! Loads holdings from a file, prices them and prints the portfolio analysis.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use nestegg_engine::PortfolioServiceBuilder;
use nestegg_ext_file::{ledger_from_files, CsvPriceSource};
use nestegg_portfolio::{
    combined_gain, format_currency, render_report, AnalysisWarning, AssetAnalysis, CombinedGain,
    PortfolioSnapshot, RealizedGainsSummary, ReportOptions, SectorBreakdown,
};

use crate::cli::OutputFormat;
use crate::commands::{require_file, Context};
use crate::error::CliError;
use crate::output::{format_change, format_percent, print_output, print_warning, KeyValue};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Holdings file (CSV or JSON)
    #[arg(long)]
    pub holdings: PathBuf,

    /// Price file (CSV with symbol,price columns)
    #[arg(long)]
    pub prices: Option<PathBuf>,

    /// Closed transactions file (JSON); adds realized gains to the totals
    #[arg(long)]
    pub transactions: Option<PathBuf>,

    /// Print the narrative report
    #[arg(long)]
    pub report: bool,

    /// Enable gain-based recommendation rules
    #[arg(long)]
    pub performance_rules: bool,
}

/// Row of the holdings table.
#[derive(Debug, Serialize, Tabled)]
struct AssetRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "P/L")]
    profit_loss: String,
    #[tabled(rename = "P/L %")]
    profit_loss_percent: String,
    #[tabled(rename = "Weight")]
    weight: String,
}

impl AssetRow {
    fn new(asset: &AssetAnalysis, colored: bool) -> Self {
        let suffix = if asset.priced { "" } else { " *" };
        Self {
            symbol: format!("{}{}", asset.symbol, suffix),
            sector: asset.sector.to_string(),
            quantity: asset.quantity.normalize().to_string(),
            value: format_currency(asset.value),
            profit_loss: format_currency(asset.profit_loss),
            profit_loss_percent: if colored {
                format_change(asset.profit_loss_percent)
            } else {
                format!("{:.2}", asset.profit_loss_percent)
            },
            weight: format_percent(asset.weight),
        }
    }
}

/// Row of the sector table.
#[derive(Debug, Serialize, Tabled)]
struct SectorRow {
    #[tabled(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Holdings")]
    count: usize,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Weight")]
    weight: String,
}

impl From<&SectorBreakdown> for SectorRow {
    fn from(s: &SectorBreakdown) -> Self {
        Self {
            sector: s.sector.to_string(),
            count: s.count,
            value: format_currency(s.value),
            weight: format_percent(s.weight),
        }
    }
}

/// JSON document for `analyze --format json`.
#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    #[serde(flatten)]
    snapshot: &'a PortfolioSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    realized: Option<&'a RealizedGainsSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    combined_gain: Option<CombinedGain>,
}

/// Execute the analyze command.
pub async fn execute(args: AnalyzeArgs, ctx: &Context) -> Result<()> {
    require_file(&args.holdings)?;
    if let Some(prices) = &args.prices {
        require_file(prices)?;
    }

    let mut config = ctx.engine_config()?;
    if args.performance_rules {
        config.analytics = config.analytics.with_performance_rules(true);
    }
    let report_options = ReportOptions::from(&config.analytics);

    let user = ctx.user();
    let ledger = Arc::new(
        ledger_from_files(&user, &args.holdings, args.transactions.as_deref()).await?,
    );

    let mut builder = PortfolioServiceBuilder::new()
        .with_config(config)
        .with_holdings(ledger.clone())
        .with_transactions(ledger);
    if let Some(prices) = &args.prices {
        builder = builder.with_prices(Arc::new(CsvPriceSource::new(prices)?));
    }
    let service = builder.build()?;

    let snapshot = match service.analyze(&user).await {
        Ok(snapshot) => snapshot,
        Err(e) if e.is_no_assets() => return Err(CliError::NoAssets(args.holdings).into()),
        Err(e) => return Err(e.into()),
    };

    let realized = match args.transactions {
        Some(_) => Some(service.realized_gains(&user).await?),
        None => None,
    };

    if args.report {
        println!("{}", render_report(&snapshot, &report_options));
        return Ok(());
    }

    match ctx.format {
        OutputFormat::Table => print_tables(&snapshot, realized.as_ref(), ctx)?,
        OutputFormat::Json => {
            let output = AnalyzeOutput {
                snapshot: &snapshot,
                realized: realized.as_ref(),
                combined_gain: realized
                    .as_ref()
                    .map(|r| combined_gain(&snapshot, r))
                    .transpose()?,
            };
            crate::output::print_json_value(&output)?;
        }
        OutputFormat::Csv => {
            let rows: Vec<AssetRow> = snapshot
                .assets
                .iter()
                .map(|a| AssetRow::new(a, false))
                .collect();
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Minimal => {
            println!("{}", format_currency(snapshot.total_value));
        }
    }

    Ok(())
}

fn print_tables(
    snapshot: &PortfolioSnapshot,
    realized: Option<&RealizedGainsSummary>,
    ctx: &Context,
) -> Result<()> {
    let risk = &snapshot.risk_metrics;
    let mut summary = vec![
        KeyValue::new("Total Value", format_currency(snapshot.total_value)),
        KeyValue::new("Total Invested", format_currency(snapshot.total_invested)),
        KeyValue::new("Unrealized Gain", format_currency(snapshot.total_gain)),
        KeyValue::new("Return", format_change(snapshot.total_gain_percent)),
        KeyValue::new(
            "Diversification Score",
            format!("{}/100", risk.diversification_score),
        ),
        KeyValue::new("Concentration Risk", risk.concentration_risk.to_string()),
        KeyValue::new("Assets / Sectors", format!("{} / {}", risk.asset_count, risk.sector_count)),
    ];
    if let Some(realized) = realized {
        let combined = combined_gain(snapshot, realized)?;
        summary.push(KeyValue::new(
            "Realized Gain",
            format_currency(combined.realized),
        ));
        summary.push(KeyValue::new("Total Gain", format_currency(combined.total)));
    }

    ctx.header("Portfolio Summary");
    print_output(&summary, OutputFormat::Table)?;

    ctx.header("Holdings");
    let rows: Vec<AssetRow> = snapshot.assets.iter().map(|a| AssetRow::new(a, true)).collect();
    print_output(&rows, OutputFormat::Table)?;

    ctx.header("Sectors");
    let sectors: Vec<SectorRow> = snapshot.sectors.iter().map(SectorRow::from).collect();
    print_output(&sectors, OutputFormat::Table)?;

    ctx.header("Recommendations");
    for recommendation in &snapshot.recommendations {
        println!("  - {}", recommendation);
    }

    for warning in &snapshot.warnings {
        match warning {
            AnalysisWarning::UpstreamDataDegraded { symbols } => {
                let list: Vec<&str> = symbols.iter().map(|s| s.as_str()).collect();
                print_warning(&format!(
                    "No current price for {}; valued at cost basis (marked *)",
                    list.join(", ")
                ));
            }
        }
    }

    Ok(())
}
