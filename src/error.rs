//! Error types for the decision engine and its input series.

use chrono::NaiveDate;
use thiserror::Error;

/// Rejected engine input. Insufficient history is not an error: the engine
/// answers SAFE instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("window `{name}` must be a positive integer")]
    InvalidWindow { name: &'static str },

    #[error("preferred safe asset must not be empty")]
    EmptySafeAsset,

    #[error("`{field}` out of range: {value}")]
    InvalidAllocation { field: &'static str, value: f64 },

    #[error("non-finite value in `{field}`{}", fmt_date(.date))]
    NonFinite {
        field: &'static str,
        date: Option<NaiveDate>,
    },

    #[error("`{field}` must be positive, got {value}{}", fmt_date(.date))]
    NonPositive {
        field: &'static str,
        value: f64,
        date: Option<NaiveDate>,
    },
}

/// Violation of the date-ascending, unique-date invariant of a series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("duplicate bar for {0}")]
    DuplicateDate(NaiveDate),

    #[error("bar for {next} follows bar for {previous}")]
    OutOfOrder {
        previous: NaiveDate,
        next: NaiveDate,
    },
}

fn fmt_date(date: &Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!(" on {d}"),
        None => String::new(),
    }
}
