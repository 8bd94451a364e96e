//! Date and time tokens in statement rows.

use chrono::NaiveDate;

use super::patterns::{FULL_DATE, TIME_ONLY};

/// What kind of row a line's first word starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMarker {
    /// The word starts with a DD/MM/YY date.
    Date,
    /// The word is a bare H:MM or HH:MM time.
    TimeOnly,
}

/// Classify the first word of a line.
pub fn row_marker(token: &str) -> Option<RowMarker> {
    if FULL_DATE.is_match(token) {
        Some(RowMarker::Date)
    } else if TIME_ONLY.is_match(token) {
        Some(RowMarker::TimeOnly)
    } else {
        None
    }
}

/// Parse a statement date (DD/MM/YY, or DD/MM/YYYY).
pub fn parse_statement_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%d/%m/%y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()
}
