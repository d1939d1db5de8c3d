use super::account::Account;
use super::transaction::Transaction;
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage port for accounts and the transactions recorded against them.
///
/// Callers are expected to serialise access; see
/// [`PaymentProcessor`](crate::application::processor::PaymentProcessor).
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Returns the account for `user_id`, opening it with the seed balance if
    /// it does not exist yet.
    async fn get_or_create_account(&mut self, user_id: i64) -> Result<Account>;
    async fn record_transaction(&mut self, tx: Transaction) -> Result<()>;
    async fn account(&self, user_id: i64) -> Result<Option<Account>>;
    async fn transaction(&self, tx_id: Uuid) -> Result<Option<Transaction>>;
    /// All transactions of `user_id`, in the order they were recorded.
    async fn transactions_for_user(&self, user_id: i64) -> Result<Vec<Transaction>>;
    async fn account_count(&self) -> Result<usize>;
    async fn transaction_count(&self) -> Result<usize>;
}

pub type LedgerStoreBox = Box<dyn LedgerStore>;
