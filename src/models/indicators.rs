use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Indicators derived for one evaluation. `date` is the last historical bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub date: NaiveDate,
    pub eq_sma_year: f64,
    pub eq_sma_long: f64,
    pub eq_sma_short: f64,
    pub ref_sma: f64,
    pub vol_sma_short: f64,
    pub vol_sma_long: f64,
    pub vol_smooth_short: f64,
    pub vol_smooth_long: f64,
    /// Today's volatility open against yesterday's volatility open.
    pub vol_change_vs_open: f64,
    /// Today's volatility open against yesterday's volatility close.
    pub vol_change_vs_close: f64,
}

impl IndicatorSnapshot {
    /// Bitwise comparison, treating `-0.0` and `0.0` as different.
    pub fn bit_identical(&self, other: &Self) -> bool {
        self.date == other.date
            && self
                .values()
                .iter()
                .zip(other.values().iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }

    fn values(&self) -> [f64; 10] {
        [
            self.eq_sma_year,
            self.eq_sma_long,
            self.eq_sma_short,
            self.ref_sma,
            self.vol_sma_short,
            self.vol_sma_long,
            self.vol_smooth_short,
            self.vol_smooth_long,
            self.vol_change_vs_open,
            self.vol_change_vs_close,
        ]
    }
}
