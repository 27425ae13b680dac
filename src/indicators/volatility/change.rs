//! Volatility shock ratios between today's open and yesterday's bar.

use crate::models::bar::DailyBar;

/// `current / reference - 1`.
pub fn pct_change(current: f64, reference: f64) -> f64 {
    current / reference - 1.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilityShock {
    /// Today's open vs yesterday's open.
    pub vs_open: f64,
    /// Today's open vs yesterday's close.
    pub vs_close: f64,
}

impl VolatilityShock {
    pub fn measure(yesterday: &DailyBar, vol_open_today: f64) -> Self {
        Self {
            vs_open: pct_change(vol_open_today, yesterday.vol_open),
            vs_close: pct_change(vol_open_today, yesterday.vol_close),
        }
    }
}
