//! # Nestegg Ext File
//!
//! File-based collaborators for the Nestegg engine.
//!
//! This crate provides default implementations for local use and tests:
//! - CSV-based price source and a fixed in-memory price source
//! - CSV/JSON holdings files and JSON transaction files
//! - An in-memory ledger implementing both store traits

#![warn(missing_docs)]
#![warn(clippy::all)]

mod ledger;
mod prices;
mod records;

pub use ledger::*;
pub use prices::*;
pub use records::*;

use std::path::Path;

use nestegg_traits::error::TraitError;
use nestegg_traits::ids::UserId;
use nestegg_traits::storage::HoldingStore;

/// Create a ledger seeded from a holdings file and an optional transactions file.
///
/// Holdings without an id are assigned the first `h<n>` not used anywhere in
/// the file, in file order.
pub async fn ledger_from_files(
    user: &UserId,
    holdings: impl AsRef<Path>,
    transactions: Option<&Path>,
) -> Result<InMemoryLedger, TraitError> {
    let mut holdings = load_holdings(holdings)?;
    for i in 0..holdings.len() {
        if holdings[i].id.is_none() {
            let id = InMemoryLedger::fresh_id(&holdings);
            holdings[i].id = Some(id);
        }
    }

    let ledger = InMemoryLedger::new();
    for holding in &holdings {
        ledger.save_holding(user, holding).await?;
    }
    if let Some(path) = transactions {
        ledger.load_transactions(user, load_transactions(path)?);
    }
    Ok(ledger)
}
