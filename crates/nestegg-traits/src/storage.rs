//! Storage traits for holdings and closed transactions.
//!
//! Stores are scoped per user. The engine relies on two guarantees:
//! - `list_holdings` returns a consistent read
//! - `insert_transaction` has completed before `delete_holding` is called
//!   for the same position

use async_trait::async_trait;
use nestegg_core::{ClosedTransaction, Holding};

use crate::error::TraitError;
use crate::ids::{HoldingId, UserId};

/// Trait for open-holding storage.
#[async_trait]
pub trait HoldingStore: Send + Sync {
    /// All holdings for a user, in insertion order.
    async fn list_holdings(&self, user: &UserId) -> Result<Vec<Holding>, TraitError>;

    /// A single holding.
    async fn get_holding(&self, user: &UserId, id: &HoldingId)
        -> Result<Option<Holding>, TraitError>;

    /// Add a holding. Returns the id it was stored under.
    async fn save_holding(&self, user: &UserId, holding: &Holding) -> Result<HoldingId, TraitError>;

    /// Remove a holding. Returns true if it existed.
    async fn delete_holding(&self, user: &UserId, id: &HoldingId) -> Result<bool, TraitError>;
}

/// Trait for closed-transaction storage.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Persist a realized transaction.
    async fn insert_transaction(
        &self,
        user: &UserId,
        transaction: &ClosedTransaction,
    ) -> Result<(), TraitError>;

    /// All transactions for a user, in any order.
    async fn list_transactions(&self, user: &UserId) -> Result<Vec<ClosedTransaction>, TraitError>;
}
