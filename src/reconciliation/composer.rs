//! Output composition: annotate copies of the input ledgers with match status

use crate::types::*;

/// Pair each record with its status, copying the record.
///
/// Positions without a status (which the matcher never produces) are
/// reported as missing.
pub fn annotate(ledger: &[Transaction], statuses: &[MatchStatus]) -> Vec<AnnotatedTransaction> {
    ledger
        .iter()
        .enumerate()
        .map(|(position, transaction)| {
            let status = statuses.get(position).copied().unwrap_or_default();
            AnnotatedTransaction::new(transaction.clone(), status)
        })
        .collect()
}
