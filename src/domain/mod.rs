//! Domain layer: the ledger's entities, the allow-list, and the storage port.

pub mod account;
pub mod allow_list;
pub mod ports;
pub mod transaction;
