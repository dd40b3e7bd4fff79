//! Building ledgers and converting them to and from raw string records

use crate::types::*;

/// An ordered sequence of transactions
pub type Ledger = Vec<Transaction>;

impl Transaction {
    /// Build a transaction from a raw `[date, category, value, service]` record
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> ReconcileResult<Self> {
        match fields {
            [date, category, value, service] => Ok(Self::new(
                date.as_ref(),
                category.as_ref(),
                value.as_ref(),
                service.as_ref(),
            )),
            _ => Err(ReconcileError::MalformedRecord {
                expected: TRANSACTION_FIELDS,
                found: fields.len(),
            }),
        }
    }
}

/// Builder for assembling a ledger in order
#[derive(Debug, Clone, Default)]
pub struct LedgerBuilder {
    ledger: Ledger,
}

impl LedgerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction from its four fields
    pub fn transaction(
        self,
        date: impl Into<String>,
        category: impl Into<String>,
        value: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        self.entry(Transaction::new(date, category, value, service))
    }

    /// Append an existing transaction
    pub fn entry(mut self, transaction: Transaction) -> Self {
        self.ledger.push(transaction);
        self
    }

    pub fn build(self) -> Ledger {
        self.ledger
    }
}

/// Parse a ledger from raw string records, keeping their order
pub fn ledger_from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> ReconcileResult<Ledger> {
    rows.iter()
        .map(|row| Transaction::from_fields(row.as_slice()))
        .collect()
}

/// Flatten annotated transactions into 5-field string records
pub fn into_rows(ledger: Vec<AnnotatedTransaction>) -> Vec<Vec<String>> {
    ledger
        .into_iter()
        .map(AnnotatedTransaction::into_fields)
        .collect()
}
