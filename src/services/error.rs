use crate::error::EngineError;
use chrono::NaiveDate;
use thiserror::Error;

/// Failure inside a storage collaborator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no market data between {start} and {end}")]
    NoHistory { start: NaiveDate, end: NaiveDate },

    #[error("lookback of {years} years reaches before the calendar start")]
    LookbackOutOfRange { years: u32 },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
