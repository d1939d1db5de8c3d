//! Gateway boundary: decoding requests and encoding receipts.

pub mod json;
