//! Core types and data structures for the reconciliation engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fields in a raw transaction record
pub const TRANSACTION_FIELDS: usize = 4;

/// A single ledger record as it arrives from the outside world.
///
/// All four fields are kept as the original strings. Only `date` is ever
/// interpreted; the other three are compared byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,
    /// Category label
    pub category: String,
    /// Value token (never parsed as an amount)
    pub value: String,
    /// Service or counterparty label
    pub service: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        value: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            value: value.into(),
            service: service.into(),
        }
    }

    /// The exact-match key of this transaction
    pub fn match_key(&self) -> MatchKey {
        MatchKey {
            category: self.category.clone(),
            value: self.value.clone(),
            service: self.service.clone(),
        }
    }

    /// Return the record as its four raw fields
    pub fn into_fields(self) -> Vec<String> {
        vec![self.date, self.category, self.value, self.service]
    }
}

/// The `(category, value, service)` triple two transactions must share to match
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchKey {
    pub category: String,
    pub value: String,
    pub service: String,
}

/// Match status of a reconciled transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchStatus {
    /// A counterpart was found in the other ledger
    Found,
    /// No counterpart was found
    #[default]
    Missing,
}

impl MatchStatus {
    /// Literal used in reconciled output records
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Found => "FOUND",
            MatchStatus::Missing => "MISSING",
        }
    }

    /// Whether a counterpart was found
    pub fn is_found(&self) -> bool {
        matches!(self, MatchStatus::Found)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction together with its reconciliation status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedTransaction {
    /// The original record, copied
    pub transaction: Transaction,
    /// Whether a counterpart was found
    pub status: MatchStatus,
}

impl AnnotatedTransaction {
    /// Wrap a transaction with the given status
    pub fn new(transaction: Transaction, status: MatchStatus) -> Self {
        Self {
            transaction,
            status,
        }
    }

    /// Whether this record was matched against the other ledger
    pub fn is_found(&self) -> bool {
        self.status.is_found()
    }

    /// Return the record as its four raw fields plus the trailing status literal
    pub fn into_fields(self) -> Vec<String> {
        let mut fields = self.transaction.into_fields();
        fields.push(self.status.as_str().to_string());
        fields
    }
}

/// Which of the two ledgers a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerSide {
    /// The ledger walked in order by the matcher
    First,
    /// The ledger the candidate index is built from
    Second,
}

impl fmt::Display for LedgerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerSide::First => f.write_str("first"),
            LedgerSide::Second => f.write_str("second"),
        }
    }
}

/// Errors that can occur while reconciling ledgers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconcileError {
    #[error("Invalid date format in {side} ledger at position {position}: {value:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat {
        side: LedgerSide,
        position: usize,
        value: String,
    },
    #[error("Malformed record: expected {expected} fields, found {found}")]
    MalformedRecord { expected: usize, found: usize },
}

/// Result type for reconciliation operations
pub type ReconcileResult<T> = Result<T, ReconcileError>;
