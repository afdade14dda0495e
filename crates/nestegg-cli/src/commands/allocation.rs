//! Allocation command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use nestegg_portfolio::{allocation_for_profile, AllocationProfile, RiskProfile, StockSuggestion};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::print_output;

/// Arguments for the allocation command.
#[derive(Args, Debug)]
pub struct AllocationArgs {
    /// Risk profile: 1=Conservative, 2=Balanced, 3=Dynamic, 4=Aggressive.
    /// All profiles are listed when omitted.
    #[arg(short, long)]
    pub profile: Option<u8>,
}

/// Row of the allocation table.
#[derive(Debug, Serialize, Tabled)]
struct AllocationRow {
    #[tabled(rename = "Level")]
    level: u8,
    #[tabled(rename = "Profile")]
    profile: String,
    #[tabled(rename = "Stocks %")]
    stocks: u8,
    #[tabled(rename = "Bonds %")]
    bonds: u8,
    #[tabled(rename = "Cash %")]
    cash: u8,
}

impl From<&AllocationProfile> for AllocationRow {
    fn from(a: &AllocationProfile) -> Self {
        Self {
            level: a.profile_type.level(),
            profile: a.profile_type.to_string(),
            stocks: a.stocks,
            bonds: a.bonds,
            cash: a.cash,
        }
    }
}

/// Row of the suggested stocks table.
#[derive(Debug, Serialize, Tabled)]
struct SuggestionRow {
    #[tabled(rename = "Symbol")]
    symbol: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Sector")]
    sector: &'static str,
    #[tabled(rename = "Why")]
    reason: &'static str,
}

impl From<&StockSuggestion> for SuggestionRow {
    fn from(s: &StockSuggestion) -> Self {
        Self {
            symbol: s.symbol,
            name: s.name,
            sector: s.sector,
            reason: s.reason,
        }
    }
}

/// Execute the allocation command.
pub fn execute(args: AllocationArgs, ctx: &Context) -> Result<()> {
    let profiles: Vec<AllocationProfile> = match args.profile {
        Some(level) => vec![allocation_for_profile(level)?],
        None => RiskProfile::ALL.into_iter().map(AllocationProfile::from).collect(),
    };
    let rows: Vec<AllocationRow> = profiles.iter().map(AllocationRow::from).collect();

    match ctx.format {
        OutputFormat::Table => {
            ctx.header("Model Allocations");
            print_output(&rows, ctx.format)?;
            if let [single] = profiles.as_slice() {
                println!("\n{}", single.explanation);

                ctx.header("Suggested Stocks");
                let suggestions: Vec<SuggestionRow> =
                    single.suggestions.iter().map(SuggestionRow::from).collect();
                print_output(&suggestions, ctx.format)?;
            }
        }
        OutputFormat::Json => match profiles.as_slice() {
            [single] => crate::output::print_json_value(single)?,
            all => crate::output::print_json_value(all)?,
        },
        OutputFormat::Csv => print_output(&rows, ctx.format)?,
        OutputFormat::Minimal => {
            for a in &profiles {
                println!("{}/{}/{}", a.stocks, a.bonds, a.cash);
            }
        }
    }

    Ok(())
}
