use crate::domain::account::Account;
use crate::domain::ports::LedgerStore;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

/// An in-memory ledger of accounts and transactions.
///
/// Accounts are keyed by user id and transactions by their own id. Each user's
/// transaction ids are also kept in recording order. The store holds no lock
/// of its own: it is owned by the processor, which guards it
/// with a single mutex for the duration of a whole payment.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    accounts: HashMap<i64, Account>,
    transactions: HashMap<Uuid, Transaction>,
    history: HashMap<i64, Vec<Uuid>>,
}

impl InMemoryLedger {
    /// Creates a new, empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedger {
    async fn get_or_create_account(&mut self, user_id: i64) -> Result<Account> {
        let account = self.accounts.entry(user_id).or_insert_with(|| {
            let account = Account::open(user_id);
            log::info!("opened account {} for user {}", account.id, user_id);
            account
        });
        Ok(account.clone())
    }

    async fn record_transaction(&mut self, tx: Transaction) -> Result<()> {
        self.history.entry(tx.user_id).or_default().push(tx.id);
        self.transactions.insert(tx.id, tx);
        Ok(())
    }

    async fn account(&self, user_id: i64) -> Result<Option<Account>> {
        Ok(self.accounts.get(&user_id).cloned())
    }

    async fn transaction(&self, tx_id: Uuid) -> Result<Option<Transaction>> {
        Ok(self.transactions.get(&tx_id).cloned())
    }

    async fn transactions_for_user(&self, user_id: i64) -> Result<Vec<Transaction>> {
        let ids = self.history.get(&user_id).map(Vec::as_slice).unwrap_or_default();
        Ok(ids
            .iter()
            .filter_map(|id| self.transactions.get(id))
            .cloned()
            .collect())
    }

    async fn account_count(&self) -> Result<usize> {
        Ok(self.accounts.len())
    }

    async fn transaction_count(&self) -> Result<usize> {
        Ok(self.transactions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Balance;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_get_or_create_is_idempotent() {
        let mut store = InMemoryLedger::new();

        let first = store.get_or_create_account(1).await.unwrap();
        let second = store.get_or_create_account(1).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first, second);
        assert_eq!(store.account_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_new_account_has_seed_balance() {
        let mut store = InMemoryLedger::new();
        let account = store.get_or_create_account(5).await.unwrap();

        assert_eq!(account.balance, Balance::new(dec!(1000000)));
        assert_eq!(store.account(5).await.unwrap(), Some(account));
        assert!(store.account(6).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_record_and_lookup_transaction() {
        let mut store = InMemoryLedger::new();
        let account = store.get_or_create_account(1).await.unwrap();
        let tx = Transaction::payment(&account, dec!(100), "tea".to_string());

        store.record_transaction(tx.clone()).await.unwrap();

        assert_eq!(store.transaction(tx.id).await.unwrap(), Some(tx));
        assert!(store.transaction(Uuid::new_v4()).await.unwrap().is_none());
        assert_eq!(store.transaction_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_transactions_for_user_filters_by_owner() {
        let mut store = InMemoryLedger::new();
        let alice = store.get_or_create_account(1).await.unwrap();
        let bob = store.get_or_create_account(2).await.unwrap();

        for amount in [dec!(1), dec!(2)] {
            let tx = Transaction::payment(&alice, amount, "a".to_string());
            store.record_transaction(tx).await.unwrap();
        }
        let tx = Transaction::payment(&bob, dec!(3), "b".to_string());
        store.record_transaction(tx).await.unwrap();

        let history = store.transactions_for_user(1).await.unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|tx| tx.account_id == alice.id));
        assert!(store.transactions_for_user(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_keeps_recording_order_for_equal_timestamps() {
        let mut store = InMemoryLedger::new();
        let account = store.get_or_create_account(1).await.unwrap();
        let first = Transaction::payment(&account, dec!(1), "a".to_string());

        let mut recorded = vec![first.clone()];
        for amount in [dec!(2), dec!(3), dec!(4)] {
            let mut tx = Transaction::payment(&account, amount, "a".to_string());
            tx.created_at = first.created_at;
            recorded.push(tx);
        }
        for tx in recorded.iter().cloned() {
            store.record_transaction(tx).await.unwrap();
        }

        let history = store.transactions_for_user(1).await.unwrap();
        assert_eq!(history, recorded);
    }
}
