//! Candidate index built from the second ledger

use chrono::NaiveDate;
use std::collections::{HashMap, VecDeque};
use tracing::debug;

use crate::traits::DateParser;
use crate::types::*;

/// Lookup of second-ledger positions grouped by match key, then by calendar date.
///
/// Positions inside a date bucket keep their insertion order, so the first
/// remaining position is always the earliest one in the second ledger.
/// Empty buckets are never kept around.
#[derive(Debug, Clone, Default)]
pub struct CandidateIndex {
    buckets: HashMap<MatchKey, HashMap<NaiveDate, VecDeque<usize>>>,
    source_len: usize,
}

impl CandidateIndex {
    /// Build the index from a ledger, failing on the first unparsable date
    pub fn build(ledger: &[Transaction], parser: &dyn DateParser) -> ReconcileResult<Self> {
        let mut buckets: HashMap<MatchKey, HashMap<NaiveDate, VecDeque<usize>>> = HashMap::new();

        for (position, transaction) in ledger.iter().enumerate() {
            let date = parser.parse_date(&transaction.date).ok_or_else(|| {
                ReconcileError::InvalidDateFormat {
                    side: LedgerSide::Second,
                    position,
                    value: transaction.date.clone(),
                }
            })?;

            buckets
                .entry(transaction.match_key())
                .or_default()
                .entry(date)
                .or_default()
                .push_back(position);
        }

        let index = Self {
            buckets,
            source_len: ledger.len(),
        };
        debug!(
            keys = index.buckets.len(),
            buckets = index.bucket_count(),
            positions = index.remaining(),
            "candidate index built"
        );
        Ok(index)
    }

    /// Consume the best candidate for `key` dated within `window_days` of `around`.
    ///
    /// The earliest calendar date with a remaining position wins, regardless of
    /// its distance from `around`. Within that date the first-inserted position
    /// wins. The position is removed for good.
    ///
    /// Only the buckets already held for `key` are scanned, so the cost does not
    /// grow with the window size.
    pub fn take_earliest(
        &mut self,
        key: &MatchKey,
        around: NaiveDate,
        window_days: u32,
    ) -> Option<(NaiveDate, usize)> {
        let max_distance = i64::from(window_days);
        let dates = self.buckets.get_mut(key)?;

        let date = dates
            .iter()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(date, _)| *date)
            .filter(|date| date.signed_duration_since(around).num_days().abs() <= max_distance)
            .min()?;

        let bucket = dates.get_mut(&date)?;
        let position = bucket.pop_front()?;

        if bucket.is_empty() {
            dates.remove(&date);
        }
        if dates.is_empty() {
            self.buckets.remove(key);
        }

        Some((date, position))
    }

    /// Whether any candidates remain for a key
    pub fn contains_key(&self, key: &MatchKey) -> bool {
        self.buckets.contains_key(key)
    }

    /// Length of the ledger the index was built from
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Positions still waiting for a match
    pub fn remaining(&self) -> usize {
        self.buckets
            .values()
            .flat_map(|dates| dates.values())
            .map(VecDeque::len)
            .sum()
    }

    /// Number of (key, date) buckets currently held
    pub fn bucket_count(&self) -> usize {
        self.buckets.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
