use crate::domain::account::Account;
use crate::domain::allow_list::AllowList;
use crate::domain::ports::LedgerStoreBox;
use crate::domain::transaction::{PaymentRequest, PaymentResult, Rejection, Transaction};
use crate::error::Result;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Processes payment requests against a ledger.
///
/// `PaymentProcessor` owns the storage backend behind a single mutex. The lock
/// is held from the allow-list check through transaction recording, so
/// payments are processed one at a time no matter how many tasks share the
/// processor.
pub struct PaymentProcessor {
    ledger: Mutex<LedgerStoreBox>,
    allow_list: AllowList,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor` instance.
    ///
    /// # Arguments
    ///
    /// * `ledger` - The store holding accounts and transactions.
    /// * `allow_list` - Phone numbers permitted to transact.
    pub fn new(ledger: LedgerStoreBox, allow_list: AllowList) -> Self {
        Self {
            ledger: Mutex::new(ledger),
            allow_list,
        }
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    /// Processes one payment request end to end.
    ///
    /// An unregistered phone number yields [`PaymentResult::Rejected`] and
    /// leaves the ledger untouched. Otherwise the user's account is fetched or
    /// opened and a successful transaction is recorded and returned.
    pub async fn process_payment(&self, request: PaymentRequest) -> Result<PaymentResult> {
        let mut ledger = self.ledger.lock().await;

        if !self.allow_list.contains(&request.phone_number) {
            log::warn!(
                "rejected payment for user {}: phone number {} is not registered",
                request.user_id,
                mask_phone_number(&request.phone_number)
            );
            return Ok(PaymentResult::Rejected(Rejection::unregistered_phone(
                request.amount,
            )));
        }

        let account = ledger.get_or_create_account(request.user_id).await?;
        let tx = Transaction::payment(&account, request.amount, request.description);
        ledger.record_transaction(tx.clone()).await?;

        log::debug!(
            "recorded payment {} of {} for user {} on account {}",
            tx.id,
            tx.amount,
            tx.user_id,
            tx.account_id
        );
        Ok(PaymentResult::Recorded(tx))
    }

    pub async fn account(&self, user_id: i64) -> Result<Option<Account>> {
        self.ledger.lock().await.account(user_id).await
    }

    pub async fn transaction(&self, tx_id: Uuid) -> Result<Option<Transaction>> {
        self.ledger.lock().await.transaction(tx_id).await
    }

    /// Returns the recorded payments of `user_id`, in the order they were recorded.
    pub async fn history(&self, user_id: i64) -> Result<Vec<Transaction>> {
        self.ledger.lock().await.transactions_for_user(user_id).await
    }

    /// Returns the number of accounts and transactions currently held.
    pub async fn ledger_size(&self) -> Result<(usize, usize)> {
        let ledger = self.ledger.lock().await;
        Ok((
            ledger.account_count().await?,
            ledger.transaction_count().await?,
        ))
    }
}

/// Hides all but the last three digits of a phone number.
fn mask_phone_number(phone_number: &str) -> String {
    let visible = phone_number.chars().count().saturating_sub(3);
    phone_number
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible { '*' } else { c })
        .collect()
}
