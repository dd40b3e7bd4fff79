//! Reconciliation of two independently produced ledgers
//!
//! The engine runs three stages, each depending only on the previous one:
//!
//! 1. [`CandidateIndex`] groups the second ledger by match key and date.
//! 2. [`Matcher`] walks the first ledger in order and consumes candidates
//!    inside the date window, earliest date first.
//! 3. [`annotate`] copies both ledgers with a trailing `FOUND`/`MISSING` status.
//!
//! The index lives only for the duration of one call.

pub mod composer;
pub mod index;
pub mod matcher;

pub use composer::annotate;
pub use index::CandidateIndex;
pub use matcher::{MatchOutcome, MatchedPair, Matcher};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::traits::*;
use crate::types::*;

/// Default tolerance, in days, between the dates of two matching records
pub const DEFAULT_WINDOW_DAYS: u32 = 1;

/// Annotated ledgers produced by one reconciliation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// The first ledger, in input order, with statuses
    pub first: Vec<AnnotatedTransaction>,
    /// The second ledger, in input order, with statuses
    pub second: Vec<AnnotatedTransaction>,
    /// Pairs in the order they were matched
    pub matches: Vec<MatchedPair>,
}

impl Reconciliation {
    /// Counts for both sides of the reconciliation
    pub fn summary(&self) -> ReconciliationSummary {
        let missing = |ledger: &[AnnotatedTransaction]| {
            ledger.iter().filter(|entry| !entry.is_found()).count()
        };

        ReconciliationSummary {
            first_total: self.first.len(),
            second_total: self.second.len(),
            matched: self.matches.len(),
            first_missing: missing(&self.first),
            second_missing: missing(&self.second),
        }
    }

    /// Split into the two annotated ledgers
    pub fn into_outputs(self) -> (Vec<AnnotatedTransaction>, Vec<AnnotatedTransaction>) {
        (self.first, self.second)
    }
}

/// Totals for a reconciliation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    pub first_total: usize,
    pub second_total: usize,
    pub matched: usize,
    pub first_missing: usize,
    pub second_missing: usize,
}

impl ReconciliationSummary {
    /// True when every record on both sides found a counterpart
    pub fn is_fully_reconciled(&self) -> bool {
        self.first_missing == 0 && self.second_missing == 0
    }
}

/// Reconciliation engine
pub struct ReconciliationEngine {
    window_days: u32,
    date_parser: Box<dyn DateParser>,
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconciliationEngine {
    /// Engine with a ±1 day window and strict `YYYY-MM-DD` dates
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_WINDOW_DAYS, Box::new(IsoDateParser))
    }

    /// Engine with a custom date window (`0` matches same-day only)
    pub fn with_window(window_days: u32) -> Self {
        Self::with_settings(window_days, Box::new(IsoDateParser))
    }

    /// Engine with a custom date parser
    pub fn with_date_parser(date_parser: Box<dyn DateParser>) -> Self {
        Self::with_settings(DEFAULT_WINDOW_DAYS, date_parser)
    }

    /// Engine with both a custom date window and a custom date parser
    pub fn with_settings(window_days: u32, date_parser: Box<dyn DateParser>) -> Self {
        Self {
            window_days,
            date_parser,
        }
    }

    /// Maximum distance, in days, between the dates of two matching records
    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Reconcile `first` against `second`.
    ///
    /// Any unparsable date in either ledger fails the whole call; no partial
    /// output is returned. Inputs are never modified.
    #[instrument(name = "reconcile", skip_all, fields(first = first.len(), second = second.len()))]
    pub fn reconcile(
        &self,
        first: &[Transaction],
        second: &[Transaction],
    ) -> ReconcileResult<Reconciliation> {
        let mut index = CandidateIndex::build(second, self.date_parser.as_ref())?;

        let outcome =
            Matcher::new(self.date_parser.as_ref(), self.window_days).run(first, &mut index)?;

        let reconciliation = Reconciliation {
            first: annotate(first, &outcome.first),
            second: annotate(second, &outcome.second),
            matches: outcome.matches,
        };

        let summary = reconciliation.summary();
        debug!(
            matched = summary.matched,
            first_missing = summary.first_missing,
            second_missing = summary.second_missing,
            "reconciliation complete"
        );

        Ok(reconciliation)
    }
}

/// Reconcile two ledgers with the default engine and return both annotated ledgers
pub fn reconcile(
    first: &[Transaction],
    second: &[Transaction],
) -> ReconcileResult<(Vec<AnnotatedTransaction>, Vec<AnnotatedTransaction>)> {
    ReconciliationEngine::new()
        .reconcile(first, second)
        .map(Reconciliation::into_outputs)
}
