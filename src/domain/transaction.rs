use super::account::{Account, Balance};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

/// Message attached to every recorded payment.
pub const SUCCESS_MESSAGE: &str = "Transaksi Berhasil";
/// Message returned when the phone number is not registered.
pub const REJECTION_MESSAGE: &str = "Nomor Telepon tidak terdaftar di ShopeePay.";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Payment,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Success,
    Failed,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    ShopeePay,
}

/// A payment request as handed over by the gateway.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    pub user_id: i64,
    pub amount: Decimal,
    pub description: String,
    pub phone_number: String,
}

/// An immutable record of one accepted payment.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: i64,
    pub account_id: Uuid,
    pub r#type: TransactionType,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub balance_before: Balance,
    pub balance_after: Balance,
    pub status: TransactionStatus,
    pub method: PaymentMethod,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub message: String,
}

impl Transaction {
    /// Builds the record of a successful payment against `account`.
    ///
    /// The account is not debited: both balance snapshots carry the current
    /// balance.
    pub fn payment(account: &Account, amount: Decimal, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: account.user_id,
            account_id: account.id,
            r#type: TransactionType::Payment,
            amount,
            balance_before: account.balance,
            balance_after: account.balance,
            status: TransactionStatus::Success,
            method: PaymentMethod::ShopeePay,
            description,
            created_at: Utc::now(),
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// A request turned away before touching the ledger.
#[derive(Debug, PartialEq, Clone)]
pub struct Rejection {
    pub id: Uuid,
    pub amount: Decimal,
    pub message: String,
}

impl Rejection {
    pub fn unregistered_phone(amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            message: REJECTION_MESSAGE.to_string(),
        }
    }
}

/// Outcome of a single payment request.
#[derive(Debug, PartialEq, Clone)]
pub enum PaymentResult {
    Rejected(Rejection),
    Recorded(Transaction),
}

impl PaymentResult {
    pub fn status(&self) -> TransactionStatus {
        match self {
            PaymentResult::Rejected(_) => TransactionStatus::Failed,
            PaymentResult::Recorded(tx) => tx.status,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            PaymentResult::Rejected(rejection) => rejection.id,
            PaymentResult::Recorded(tx) => tx.id,
        }
    }

    pub fn transaction(&self) -> Option<&Transaction> {
        match self {
            PaymentResult::Rejected(_) => None,
            PaymentResult::Recorded(tx) => Some(tx),
        }
    }
}

#[derive(Serialize)]
struct RejectionReceipt<'a> {
    status: TransactionStatus,
    message: &'a str,
    id: Uuid,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
}

impl Serialize for PaymentResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PaymentResult::Recorded(tx) => tx.serialize(serializer),
            PaymentResult::Rejected(rejection) => RejectionReceipt {
                status: TransactionStatus::Failed,
                message: &rejection.message,
                id: rejection.id,
                amount: rejection.amount,
            }
            .serialize(serializer),
        }
    }
}
