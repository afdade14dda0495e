//! Domain types.
//!
//! - [`Symbol`]: normalized ticker
//! - [`Holding`]: an owned position
//! - [`ClosedTransaction`]: a liquidated position with its realized result

mod holding;
mod symbol;
mod transaction;

pub use holding::{Holding, HoldingBuilder};
pub use symbol::Symbol;
pub use transaction::{ClosedTransaction, ClosedTransactionBuilder};
