//! Ledger construction and raw record conversion

pub mod transaction;

pub use transaction::*;
