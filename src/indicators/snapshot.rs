//! Full indicator snapshot for one evaluation.

use crate::indicators::trend::sma_of;
use crate::indicators::volatility::VolatilityShock;
use crate::models::bar::{DailyBar, PriceSeries};
use crate::models::indicators::IndicatorSnapshot;
use crate::models::strategy::{StrategyParameters, REFERENCE_SMA_WINDOW};

/// Compute every SMA and shock ratio from `history` (oldest first, ending
/// yesterday) and today's volatility open.
///
/// Returns `None` for an empty history. Shorter-than-window histories
/// produce `0.0` averages.
pub fn compute_snapshot(
    history: &[DailyBar],
    params: &StrategyParameters,
    vol_open_today: f64,
) -> Option<IndicatorSnapshot> {
    let yesterday = history.last()?;
    let shock = VolatilityShock::measure(yesterday, vol_open_today);

    Some(IndicatorSnapshot {
        date: yesterday.date,
        eq_sma_year: sma_of(history, PriceSeries::EquityClose, params.sma_year),
        eq_sma_long: sma_of(history, PriceSeries::EquityClose, params.sma_long),
        eq_sma_short: sma_of(history, PriceSeries::EquityClose, params.sma_short),
        ref_sma: sma_of(history, PriceSeries::ReferenceClose, REFERENCE_SMA_WINDOW),
        vol_sma_short: sma_of(history, PriceSeries::VolatilityClose, params.vol_sma_short),
        vol_sma_long: sma_of(history, PriceSeries::VolatilityClose, params.vol_sma_long),
        vol_smooth_short: sma_of(history, PriceSeries::VolatilityClose, params.vol_smooth_short),
        vol_smooth_long: sma_of(history, PriceSeries::VolatilityClose, params.vol_smooth_long),
        vol_change_vs_open: shock.vs_open,
        vol_change_vs_close: shock.vs_close,
    })
}
