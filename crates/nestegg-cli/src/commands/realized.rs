//! Realized command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use nestegg_core::rounding::round_percent;
use nestegg_core::{ClosedTransaction, CoreError};
use nestegg_engine::PortfolioServiceBuilder;
use nestegg_ext_file::{load_transactions, InMemoryLedger};
use nestegg_portfolio::format_currency;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_output, print_info, KeyValue};

/// Arguments for the realized command.
#[derive(Args, Debug)]
pub struct RealizedArgs {
    /// Transactions file (JSON)
    #[arg(long)]
    pub transactions: PathBuf,
}

/// Row of the transactions table.
#[derive(Debug, Serialize, Tabled)]
struct TransactionRow {
    #[tabled(rename = "Sold")]
    sale_date: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Bought At")]
    purchase_price: String,
    #[tabled(rename = "Sold At")]
    sale_price: String,
    #[tabled(rename = "P/L")]
    profit_loss: String,
    #[tabled(rename = "P/L %")]
    profit_loss_percent: String,
}

impl TryFrom<&ClosedTransaction> for TransactionRow {
    type Error = CoreError;

    fn try_from(t: &ClosedTransaction) -> Result<Self, CoreError> {
        Ok(Self {
            sale_date: t.sale_date.format("%Y-%m-%d").to_string(),
            symbol: t.symbol.to_string(),
            quantity: t.quantity.normalize().to_string(),
            purchase_price: format_currency(t.purchase_price),
            sale_price: format_currency(t.sale_price),
            profit_loss: format_currency(t.profit_loss()?),
            profit_loss_percent: format!("{:.2}", round_percent(t.profit_loss_percent()?)),
        })
    }
}

/// Execute the realized command.
pub async fn execute(args: RealizedArgs, ctx: &Context) -> Result<()> {
    let user = ctx.user();
    let ledger = Arc::new(InMemoryLedger::new());
    ledger.load_transactions(&user, load_transactions(&args.transactions)?);

    let service = PortfolioServiceBuilder::new()
        .with_config(ctx.engine_config()?)
        .with_holdings(ledger.clone())
        .with_transactions(ledger)
        .build()?;
    let summary = service.realized_gains(&user).await?;

    match ctx.format {
        OutputFormat::Table => {
            if summary.transactions.is_empty() {
                if !ctx.quiet {
                    print_info("No closed positions yet.");
                }
                return Ok(());
            }
            ctx.header("Closed Positions");
            let rows = summary
                .transactions
                .iter()
                .map(TransactionRow::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            print_output(&rows, ctx.format)?;

            let totals = vec![
                KeyValue::new("Transactions", summary.total_transactions.to_string()),
                KeyValue::new(
                    "Total Realized Gains",
                    format_currency(summary.total_realized_gains),
                ),
            ];
            print_output(&totals, ctx.format)?;
        }
        OutputFormat::Json => crate::output::print_json_value(&summary)?,
        OutputFormat::Csv => {
            let rows = summary
                .transactions
                .iter()
                .map(TransactionRow::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Minimal => println!("{}", summary.total_realized_gains),
    }

    Ok(())
}
