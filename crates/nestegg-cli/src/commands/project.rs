//! Project command implementation.
//!
//! Month-by-month growth projection with a yearly breakdown.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use nestegg_portfolio::format_currency;
use nestegg_projection::{
    closed_form_future_value, project_growth, ContributionTiming, DataPoint, ProjectionParameters,
};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_change, print_output, KeyValue};

/// Arguments for the project command.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Initial lump sum
    #[arg(short, long, default_value = "0")]
    pub initial: Decimal,

    /// Amount contributed every month
    #[arg(short, long, default_value = "0")]
    pub monthly: Decimal,

    /// Horizon in years (1-100)
    #[arg(short, long)]
    pub years: u32,

    /// Expected annual return in percent (7 for 7%); may be negative
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Decimal,

    /// Add contributions at the start of each month instead of the end
    #[arg(long)]
    pub start_of_month: bool,

    /// Skip the yearly breakdown
    #[arg(long)]
    pub summary_only: bool,
}

/// Row of the yearly breakdown.
#[derive(Debug, Serialize, Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Invested")]
    invested: String,
    #[tabled(rename = "Gains")]
    gains: String,
}

impl From<&DataPoint> for YearRow {
    fn from(p: &DataPoint) -> Self {
        Self {
            year: p.year,
            balance: format_currency(p.balance),
            invested: format_currency(p.invested),
            gains: format_currency(p.gains),
        }
    }
}

/// Execute the project command.
pub fn execute(args: ProjectArgs, ctx: &Context) -> Result<()> {
    let timing = if args.start_of_month {
        ContributionTiming::StartOfMonth
    } else {
        ContributionTiming::EndOfMonth
    };
    let params = ProjectionParameters::new(args.initial, args.monthly, args.years, args.rate)
        .with_timing(timing);

    let projection = project_growth(&params)?;
    let summary = &projection.summary;

    match ctx.format {
        OutputFormat::Table => {
            if !args.summary_only {
                ctx.header("Growth Projection");
                let rows: Vec<YearRow> = projection.data_points.iter().map(YearRow::from).collect();
                print_output(&rows, ctx.format)?;
            }

            let mut results = vec![
                KeyValue::new("Final Balance", format_currency(summary.final_balance)),
                KeyValue::new("Total Contributed", format_currency(summary.total_contributed)),
                KeyValue::new("Total Gains", format_currency(summary.total_gains)),
                KeyValue::new("Total Return", format_change(summary.total_return_percent)),
            ];
            let check = closed_form_future_value(&params)?;
            if check != summary.final_balance {
                tracing::debug!(
                    "closed form {} differs from month loop {}",
                    check,
                    summary.final_balance
                );
                results.push(KeyValue::new("Closed-form Balance", format_currency(check)));
            }

            ctx.header("Summary");
            print_output(&results, ctx.format)?;
        }
        OutputFormat::Json => {
            if args.summary_only {
                crate::output::print_json_value(summary)?;
            } else {
                crate::output::print_json_value(&projection)?;
            }
        }
        OutputFormat::Csv => {
            let rows: Vec<YearRow> = projection.data_points.iter().map(YearRow::from).collect();
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Minimal => {
            println!("{}", summary.final_balance);
        }
    }

    Ok(())
}
