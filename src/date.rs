//! Date arguments
//!
//! Parses `dd-MM-yyyy` strings with chrono. A missing or unparsable date is
//! not an error here: today's date is used instead.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

/// Default date pattern (`dd-MM-yyyy`).
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

/// A date resolved from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateInput {
    pub date: NaiveDate,
    /// True when the input was absent or invalid and today was used.
    pub defaulted: bool,
}

impl DateInput {
    pub fn day(&self) -> i64 {
        i64::from(self.date.day())
    }

    pub fn month(&self) -> i64 {
        i64::from(self.date.month())
    }

    pub fn year(&self) -> i64 {
        i64::from(self.date.year())
    }
}

/// Parse `text` with `format`, returning `None` when it does not match.
pub fn parse_date(text: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), format).ok()
}

/// Resolve an optional date argument, falling back to `today`.
pub fn resolve_date(text: Option<&str>, format: &str, today: NaiveDate) -> DateInput {
    match text.and_then(|t| parse_date(t, format)) {
        Some(date) => DateInput {
            date,
            defaulted: false,
        },
        None => {
            if let Some(t) = text {
                tracing::warn!(input = t, format, "unparsable date, using today");
            }
            DateInput {
                date: today,
                defaulted: true,
            }
        }
    }
}

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
