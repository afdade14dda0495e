//! In-memory holding and transaction store.

use async_trait::async_trait;
use dashmap::DashMap;

use nestegg_core::{ClosedTransaction, Holding};
use nestegg_traits::error::TraitError;
use nestegg_traits::ids::{HoldingId, UserId};
use nestegg_traits::storage::{HoldingStore, TransactionStore};

/// In-memory ledger of open holdings and closed transactions, keyed by user.
///
/// Holdings saved without an id get the first free `h<n>` id. Data is not
/// persisted; use [`InMemoryLedger::holdings`] and
/// [`InMemoryLedger::transactions`] to write it out.
///
/// # Example
///
/// ```rust
/// use nestegg_ext_file::InMemoryLedger;
/// use nestegg_traits::UserId;
///
/// let ledger = InMemoryLedger::new();
/// assert!(ledger.holdings(&UserId::new("alice")).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    holdings: DashMap<UserId, Vec<Holding>>,
    transactions: DashMap<UserId, Vec<ClosedTransaction>>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of a user's open holdings, in insertion order.
    pub fn holdings(&self, user: &UserId) -> Vec<Holding> {
        self.holdings
            .get(user)
            .map(|h| h.value().clone())
            .unwrap_or_default()
    }

    /// Copy of a user's closed transactions, in insertion order.
    pub fn transactions(&self, user: &UserId) -> Vec<ClosedTransaction> {
        self.transactions
            .get(user)
            .map(|t| t.value().clone())
            .unwrap_or_default()
    }

    /// Replaces a user's transactions wholesale.
    pub fn load_transactions(&self, user: &UserId, transactions: Vec<ClosedTransaction>) {
        self.transactions.insert(user.clone(), transactions);
    }

    pub(crate) fn fresh_id(existing: &[Holding]) -> String {
        (1..)
            .map(|n| format!("h{n}"))
            .find(|candidate| !existing.iter().any(|h| h.id.as_deref() == Some(candidate.as_str())))
            .unwrap_or_default()
    }
}

#[async_trait]
impl HoldingStore for InMemoryLedger {
    async fn list_holdings(&self, user: &UserId) -> Result<Vec<Holding>, TraitError> {
        Ok(self.holdings(user))
    }

    async fn get_holding(
        &self,
        user: &UserId,
        id: &HoldingId,
    ) -> Result<Option<Holding>, TraitError> {
        Ok(self.holdings.get(user).and_then(|holdings| {
            holdings
                .iter()
                .find(|h| h.id.as_deref() == Some(id.as_str()))
                .cloned()
        }))
    }

    async fn save_holding(&self, user: &UserId, holding: &Holding) -> Result<HoldingId, TraitError> {
        let mut holdings = self.holdings.entry(user.clone()).or_default();

        let id = match &holding.id {
            Some(id) if holdings.iter().any(|h| h.id.as_ref() == Some(id)) => {
                return Err(TraitError::AlreadyExists(format!("holding {id}")));
            }
            Some(id) => id.clone(),
            None => Self::fresh_id(&holdings),
        };

        let mut stored = holding.clone();
        stored.id = Some(id.clone());
        holdings.push(stored);
        Ok(HoldingId::new(id))
    }

    async fn delete_holding(&self, user: &UserId, id: &HoldingId) -> Result<bool, TraitError> {
        let Some(mut holdings) = self.holdings.get_mut(user) else {
            return Ok(false);
        };
        let before = holdings.len();
        holdings.retain(|h| h.id.as_deref() != Some(id.as_str()));
        Ok(holdings.len() != before)
    }
}

#[async_trait]
impl TransactionStore for InMemoryLedger {
    async fn insert_transaction(
        &self,
        user: &UserId,
        transaction: &ClosedTransaction,
    ) -> Result<(), TraitError> {
        let mut transactions = self.transactions.entry(user.clone()).or_default();
        if transactions.iter().any(|t| t.id == transaction.id) {
            return Err(TraitError::AlreadyExists(format!(
                "transaction {}",
                transaction.id
            )));
        }
        transactions.push(transaction.clone());
        Ok(())
    }

    async fn list_transactions(&self, user: &UserId) -> Result<Vec<ClosedTransaction>, TraitError> {
        Ok(self.transactions(user))
    }
}
