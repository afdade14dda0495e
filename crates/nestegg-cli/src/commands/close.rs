//! Close command implementation.
//!
//! Sells a whole holding: the transaction file is written before the
//! holdings file, so an interrupted run never loses the sale.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use nestegg_engine::{EngineError, PortfolioServiceBuilder};
use nestegg_ext_file::{ledger_from_files, save_holdings, save_transactions, InMemoryLedger};
use nestegg_portfolio::format_currency;
use nestegg_traits::{HoldingId, UserId};

use crate::cli::OutputFormat;
use crate::commands::{parse_date, require_file, validate_price, Context};
use crate::output::{format_change, print_output, print_single, print_success, KeyValue};

/// Arguments for the close command.
#[derive(Args, Debug)]
pub struct CloseArgs {
    /// Holdings file (CSV or JSON); rewritten without the closed holding
    #[arg(long)]
    pub holdings: PathBuf,

    /// Transactions file (JSON); created if missing
    #[arg(long)]
    pub transactions: PathBuf,

    /// Id of the holding to close
    #[arg(long)]
    pub id: String,

    /// Sale price per unit
    #[arg(long)]
    pub price: Decimal,

    /// Sale date (YYYY-MM-DD). Defaults to now.
    #[arg(long)]
    pub date: Option<String>,
}

fn persist(ledger: &InMemoryLedger, user: &UserId, args: &CloseArgs) -> Result<()> {
    save_transactions(&args.transactions, &ledger.transactions(user))?;
    save_holdings(&args.holdings, &ledger.holdings(user))?;
    Ok(())
}

/// Execute the close command.
pub async fn execute(args: CloseArgs, ctx: &Context) -> Result<()> {
    require_file(&args.holdings)?;
    let price = validate_price(args.price)?;
    let sale_date = args.date.as_deref().map(parse_date).transpose()?;

    let user = ctx.user();
    let ledger = Arc::new(
        ledger_from_files(&user, &args.holdings, Some(args.transactions.as_path())).await?,
    );
    let service = PortfolioServiceBuilder::new()
        .with_config(ctx.engine_config()?)
        .with_holdings(ledger.clone())
        .with_transactions(ledger.clone())
        .build()?;

    let id = HoldingId::new(args.id.clone());
    let result = match sale_date {
        Some(date) => service.close_position_at(&user, &id, price, date).await,
        None => service.close_position(&user, &id, price).await,
    };

    let transaction = match result {
        Ok(transaction) => transaction,
        Err(e @ EngineError::PartialClose { .. }) => {
            persist(&ledger, &user, &args)?;
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };
    persist(&ledger, &user, &args)?;

    match ctx.format {
        OutputFormat::Table => {
            ctx.header("Position Closed");
            let results = vec![
                KeyValue::new("Symbol", transaction.symbol.to_string()),
                KeyValue::new("Quantity", transaction.quantity.normalize().to_string()),
                KeyValue::new("Purchase Price", format_currency(transaction.purchase_price)),
                KeyValue::new("Sale Price", format_currency(transaction.sale_price)),
                KeyValue::new("Sale Date", transaction.sale_date.format("%Y-%m-%d").to_string()),
                KeyValue::new("Profit/Loss", format_currency(transaction.profit_loss()?)),
                KeyValue::new(
                    "Return",
                    format_change(nestegg_core::rounding::round_percent(
                        transaction.profit_loss_percent()?,
                    )),
                ),
            ];
            print_output(&results, ctx.format)?;
            if !ctx.quiet {
                print_success(&format!("Recorded in {}", args.transactions.display()));
            }
        }
        OutputFormat::Json | OutputFormat::Csv => {
            print_single(&transaction, ctx.format)?;
        }
        OutputFormat::Minimal => {
            println!("{}", transaction.profit_loss()?);
        }
    }

    Ok(())
}
