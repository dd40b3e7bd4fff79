//! Greedy, input-ordered matching of the first ledger against the candidate index

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::reconciliation::index::CandidateIndex;
use crate::traits::DateParser;
use crate::types::*;

/// A confirmed pairing between the two ledgers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedPair {
    /// Position in the first ledger
    pub first: usize,
    /// Position in the second ledger
    pub second: usize,
    /// Date of the second-ledger record that was consumed
    pub date: NaiveDate,
}

/// Per-position statuses for both ledgers plus the pairs that produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub first: Vec<MatchStatus>,
    pub second: Vec<MatchStatus>,
    pub matches: Vec<MatchedPair>,
}

/// Walks the first ledger in its original order, consuming candidates as it goes.
///
/// Earlier records claim contested candidates first. The result is
/// deterministic for a given input order but is not a global optimum.
pub struct Matcher<'a> {
    parser: &'a dyn DateParser,
    window_days: u32,
}

impl<'a> Matcher<'a> {
    pub fn new(parser: &'a dyn DateParser, window_days: u32) -> Self {
        Self {
            parser,
            window_days,
        }
    }

    /// Match every record of `ledger` against `index`, consuming what it matches.
    ///
    /// Second-ledger statuses are sized from the ledger the index was built from.
    pub fn run(
        &self,
        ledger: &[Transaction],
        index: &mut CandidateIndex,
    ) -> ReconcileResult<MatchOutcome> {
        let mut first = vec![MatchStatus::Missing; ledger.len()];
        let mut second = vec![MatchStatus::Missing; index.source_len()];
        let mut matches = Vec::new();

        for (position, transaction) in ledger.iter().enumerate() {
            let date = self.parser.parse_date(&transaction.date).ok_or_else(|| {
                ReconcileError::InvalidDateFormat {
                    side: LedgerSide::First,
                    position,
                    value: transaction.date.clone(),
                }
            })?;

            let key = transaction.match_key();
            if !index.contains_key(&key) {
                trace!(position, "no candidates for key");
                continue;
            }

            match index.take_earliest(&key, date, self.window_days) {
                Some((matched_date, matched)) => {
                    trace!(position, matched, %matched_date, "matched");
                    first[position] = MatchStatus::Found;
                    second[matched] = MatchStatus::Found;
                    matches.push(MatchedPair {
                        first: position,
                        second: matched,
                        date: matched_date,
                    });
                }
                None => trace!(position, "no candidate inside date window"),
            }
        }

        Ok(MatchOutcome {
            first,
            second,
            matches,
        })
    }
}
