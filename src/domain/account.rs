use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a monetary value held by an account.
///
/// This is a wrapper around `rust_decimal::Decimal` so that balances are never
/// confused with request amounts. It is emitted on the wire as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(#[serde(with = "rust_decimal::serde::float")] pub Decimal);

impl Balance {
    /// Balance granted to every account when it is first opened.
    pub const SEED: Self = Self(dec!(1000000));

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Balance> for Decimal {
    fn from(balance: Balance) -> Self {
        balance.0
    }
}

/// A per-user ledger entry.
///
/// Accounts are opened lazily on a user's first accepted payment and are never
/// removed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    /// Opaque identifier generated when the account is opened.
    pub id: Uuid,
    /// The caller-supplied user identifier; unique across accounts.
    pub user_id: i64,
    pub balance: Balance,
}

impl Account {
    /// Opens a fresh account for `user_id` holding the seed balance.
    pub fn open(user_id: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            balance: Balance::SEED,
        }
    }
}
