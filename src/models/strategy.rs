//! Strategy parameters supplied by the caller for each evaluation.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Window of the reference-asset SMA. Not user configurable.
pub const REFERENCE_SMA_WINDOW: usize = 100;

/// Seven SMA windows, the allocation split and the safe asset label recorded
/// with each signal.
///
/// `sma_short`/`sma_long` drive the equity trend, `vol_sma_short`/`vol_sma_long`
/// the volatility sell-pressure check, `vol_smooth_short`/`vol_smooth_long` the
/// smoothed volatility trend and `sma_year` the long equity trend.
///
/// `target_leverage` and `safe_ratio` only affect backtests: the leveraged leg
/// returns `target_leverage` times the equity move, and `safe_ratio` of the
/// capital always sits in the safe asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyParameters {
    pub sma_short: usize,
    pub sma_long: usize,
    pub vol_sma_short: usize,
    pub vol_sma_long: usize,
    pub vol_smooth_short: usize,
    pub vol_smooth_long: usize,
    pub sma_year: usize,
    pub preferred_safe_asset: String,
    pub target_leverage: f64,
    pub safe_ratio: f64,
}

impl Default for StrategyParameters {
    fn default() -> Self {
        Self {
            sma_short: 5,
            sma_long: 15,
            vol_sma_short: 1,
            vol_sma_long: 3,
            vol_smooth_short: 3,
            vol_smooth_long: 9,
            sma_year: 155,
            preferred_safe_asset: "GLD".to_string(),
            target_leverage: 3.0,
            safe_ratio: 0.2,
        }
    }
}

impl StrategyParameters {
    /// Reject zero windows, a blank safe asset label, a non-positive leverage
    /// and a safe ratio outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (name, window) in self.windows() {
            if window == 0 {
                return Err(EngineError::InvalidWindow { name });
            }
        }
        if self.preferred_safe_asset.trim().is_empty() {
            return Err(EngineError::EmptySafeAsset);
        }
        if !(self.target_leverage.is_finite() && self.target_leverage > 0.0) {
            return Err(EngineError::InvalidAllocation {
                field: "target_leverage",
                value: self.target_leverage,
            });
        }
        if !(0.0..=1.0).contains(&self.safe_ratio) {
            return Err(EngineError::InvalidAllocation {
                field: "safe_ratio",
                value: self.safe_ratio,
            });
        }
        Ok(())
    }

    /// All configured windows with their names, in declaration order.
    pub fn windows(&self) -> [(&'static str, usize); 7] {
        [
            ("sma_short", self.sma_short),
            ("sma_long", self.sma_long),
            ("vol_sma_short", self.vol_sma_short),
            ("vol_sma_long", self.vol_sma_long),
            ("vol_smooth_short", self.vol_smooth_short),
            ("vol_smooth_long", self.vol_smooth_long),
            ("sma_year", self.sma_year),
        ]
    }

    /// Bars needed before the rule cascade runs: the year window plus one.
    pub fn required_history(&self) -> usize {
        self.sma_year.saturating_add(1)
    }
}
