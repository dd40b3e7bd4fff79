//! Traits for the pluggable collaborators of the reconciliation engine

use chrono::NaiveDate;

use crate::utils::validation::is_iso_date_shape;

/// Date-parsing collaborator
///
/// The engine only needs calendar-date semantics: no time of day, no timezone,
/// no locale. Returning `None` makes the whole reconciliation call fail with
/// `ReconcileError::InvalidDateFormat`.
pub trait DateParser: Send + Sync {
    /// Parse a raw date field into a calendar date
    fn parse_date(&self, raw: &str) -> Option<NaiveDate>;
}

/// Default parser for strict `YYYY-MM-DD` dates
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDateParser;

impl IsoDateParser {
    pub const FORMAT: &'static str = "%Y-%m-%d";
}

impl DateParser for IsoDateParser {
    fn parse_date(&self, raw: &str) -> Option<NaiveDate> {
        // chrono alone would also accept single-digit months and days
        if !is_iso_date_shape(raw) {
            return None;
        }
        NaiveDate::parse_from_str(raw, Self::FORMAT).ok()
    }
}
