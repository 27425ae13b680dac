//! Signal, decision branch, safe asset choice, opening prices and the
//! persisted daily record.

use crate::error::EngineError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily allocation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    /// Hold the safe asset.
    Safe,
    /// Hold leveraged equity exposure.
    Leveraged,
}

impl Signal {
    /// Numeric code used by stored signal histories: -1 safe, 1 leveraged.
    pub fn code(self) -> i8 {
        match self {
            Signal::Safe => -1,
            Signal::Leveraged => 1,
        }
    }

    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            -1 => Some(Signal::Safe),
            1 => Some(Signal::Leveraged),
            _ => None,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Safe => write!(f, "SAFE"),
            Signal::Leveraged => write!(f, "LEVERAGED"),
        }
    }
}

/// Which branch of the rule cascade produced the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionBranch {
    /// Not enough bars for the year window; SAFE without running the rules.
    InsufficientHistory,
    /// Safe condition or danger signal.
    SafeCascade,
    /// Leverage condition or rebound signal.
    LeverageCascade,
    /// Neither cascade matched; SAFE by default.
    Fallback,
}

/// Where the safe sleeve is parked on a given day.
///
/// The reference asset is used while it trades above its 100-day SMA,
/// otherwise the reserve asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafeAssetChoice {
    Reference,
    Reserve,
}

impl fmt::Display for SafeAssetChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafeAssetChoice::Reference => write!(f, "reference"),
            SafeAssetChoice::Reserve => write!(f, "reserve"),
        }
    }
}

/// Today's opening prices for the equity proxy and the volatility index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpeningPrices {
    pub equity: f64,
    pub volatility: f64,
}

impl OpeningPrices {
    /// Validated opens: both finite and strictly positive.
    pub fn new(equity: f64, volatility: f64) -> Result<Self, EngineError> {
        let opens = Self { equity, volatility };
        opens.validate()?;
        Ok(opens)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        for (field, value) in [
            ("equity_open_today", self.equity),
            ("vol_open_today", self.volatility),
        ] {
            if !value.is_finite() {
                return Err(EngineError::NonFinite { field, date: None });
            }
            if value <= 0.0 {
                return Err(EngineError::NonPositive {
                    field,
                    value,
                    date: None,
                });
            }
        }
        Ok(())
    }
}

/// Persisted outcome of one trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub date: NaiveDate,
    pub signal: Signal,
    pub branch: DecisionBranch,
    pub position_changed: bool,
    pub safe_asset: String,
}
