//! # Reconcile Core
//!
//! Reconciliation of two independently produced transaction ledgers.
//!
//! Every record in each ledger is marked `FOUND` or `MISSING` depending on
//! whether a counterpart exists in the other ledger. Two records correspond
//! when their category, value and service fields are byte-for-byte equal and
//! their dates are at most one day apart.
//!
//! ## Features
//!
//! - **Exact-key matching**: category, value and service are opaque tokens, never parsed
//! - **Tolerant date window**: ±1 day by default, configurable per engine
//! - **Deterministic greedy assignment**: the first ledger is processed in input
//!   order; among candidates the earliest date wins, then the earliest position
//! - **One-to-one**: a second-ledger record is matched at most once
//! - **All-or-nothing**: an unparsable date fails the whole call
//!
//! ## Quick Start
//!
//! ```rust
//! use reconcile_core::{reconcile, LedgerBuilder, MatchStatus};
//!
//! let first = LedgerBuilder::new()
//!     .transaction("2024-01-10", "A", "100", "X")
//!     .build();
//! let second = LedgerBuilder::new()
//!     .transaction("2024-01-09", "A", "100", "X")
//!     .transaction("2024-01-11", "A", "100", "X")
//!     .build();
//!
//! let (out1, out2) = reconcile(&first, &second).unwrap();
//! assert_eq!(out1[0].status, MatchStatus::Found);
//! assert_eq!(out2[0].status, MatchStatus::Found);
//! assert_eq!(out2[1].status, MatchStatus::Missing);
//! ```
//!
//! ## Demo
//!
//! The runnable demo lives in `demos/basic_reconciliation.rs` rather than
//! `examples/`. It is registered as a Cargo example, so it still runs with
//! `cargo run --example basic_reconciliation`.

pub mod ledger;
pub mod reconciliation;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use ledger::*;
pub use reconciliation::{
    reconcile, MatchedPair, Reconciliation, ReconciliationEngine, ReconciliationSummary,
    DEFAULT_WINDOW_DAYS,
};
pub use traits::*;
pub use types::*;
