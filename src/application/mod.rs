//! Application layer containing the payment orchestration.
//!
//! This module defines the `PaymentProcessor`, the single entry point through
//! which payment requests reach the ledger. It serialises every request behind
//! one `tokio` mutex so that a payment is checked and recorded atomically.

pub mod processor;
