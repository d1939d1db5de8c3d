use thiserror::Error;

/// Errors raised by the ledger and its boundary.
///
/// An allow-list rejection is not an error: it is reported as
/// [`PaymentResult::Rejected`](crate::domain::transaction::PaymentResult).
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, WalletError>;
