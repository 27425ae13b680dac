//! Named boolean predicates of the rule cascade.
//!
//! Every comparison is strict and every threshold is an exact literal. Each
//! predicate is a standalone function so thresholds can be tested one at a
//! time; [`ConditionSet::evaluate`] wires them to one evaluation's inputs.

use crate::models::bar::DailyBar;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::OpeningPrices;
use serde::{Deserialize, Serialize};

pub const GAP_UP_FACTOR: f64 = 1.005;
pub const GAP_DOWN_FACTOR: f64 = 0.96;
pub const VOL_SPIKE_CHANGE: f64 = 0.20;
pub const VOL_SELL_FACTOR: f64 = 1.2;
pub const VOL_DOWN_CHANGE: f64 = -0.03;
pub const VOL_MILD_DOWN_CHANGE: f64 = 0.05;
pub const VOL_SMOOTH_DOWN_FACTOR: f64 = 0.97;
pub const VOL_SMOOTH_EXTREME_FACTOR: f64 = 0.95;
pub const VOL_SMOOTH_EXTREME_LEVEL: f64 = 50.0;
pub const EQUITY_UPTREND_FACTOR: f64 = 0.99;
pub const EQUITY_DOWNTREND_FACTOR: f64 = 0.95;
pub const YEAR_ABOVE_FACTOR: f64 = 1.03;
pub const YEAR_BELOW_FACTOR: f64 = 0.99;
pub const VOL_EXTREME_LEVEL: f64 = 66.0;
pub const VOL_MODERATE_LEVEL: f64 = 60.0;
pub const VOL_LOW_LEVEL: f64 = 21.0;
pub const VOL_ELEVATED_LEVEL: f64 = 23.0;
pub const VOL_HIGH_LEVEL: f64 = 32.0;

/// Equity opens more than 0.5% above yesterday's close.
pub fn equity_gap_up(equity_open_today: f64, equity_close_yesterday: f64) -> bool {
    equity_open_today > equity_close_yesterday * GAP_UP_FACTOR
}

/// Equity opens more than 4% below yesterday's close.
pub fn equity_gap_down(equity_open_today: f64, equity_close_yesterday: f64) -> bool {
    equity_open_today < equity_close_yesterday * GAP_DOWN_FACTOR
}

/// Volatility open jumped more than 20% against yesterday's open or close.
pub fn vol_spike(change_vs_open: f64, change_vs_close: f64) -> bool {
    change_vs_open > VOL_SPIKE_CHANGE || change_vs_close > VOL_SPIKE_CHANGE
}

pub fn vol_sell_pressure(vol_sma_short: f64, vol_sma_long: f64, vol_open_today: f64) -> bool {
    let threshold = VOL_SELL_FACTOR * vol_sma_long;
    vol_sma_short > threshold || vol_open_today > threshold
}

pub fn vol_down_today(change_vs_close: f64) -> bool {
    change_vs_close < VOL_DOWN_CHANGE
}

pub fn vol_mildly_down_today(change_vs_close: f64) -> bool {
    change_vs_close < VOL_MILD_DOWN_CHANGE
}

pub fn vol_smooth_down(vol_smooth_short: f64, vol_smooth_long: f64) -> bool {
    vol_smooth_short < VOL_SMOOTH_DOWN_FACTOR * vol_smooth_long
}

/// Smoothed volatility falling hard while volatility is above 50.
pub fn vol_smooth_down_extreme(
    vol_smooth_short: f64,
    vol_smooth_long: f64,
    vol_close_yesterday: f64,
    vol_open_today: f64,
) -> bool {
    vol_smooth_short < VOL_SMOOTH_EXTREME_FACTOR * vol_smooth_long
        && (vol_close_yesterday > VOL_SMOOTH_EXTREME_LEVEL
            || vol_open_today > VOL_SMOOTH_EXTREME_LEVEL)
}

pub fn no_safety_needed(vol_mildly_down_today: bool, vol_smooth_down_extreme: bool) -> bool {
    vol_mildly_down_today && vol_smooth_down_extreme
}

pub fn equity_uptrend(eq_sma_short: f64, eq_sma_long: f64) -> bool {
    eq_sma_short > EQUITY_UPTREND_FACTOR * eq_sma_long
}

pub fn equity_downtrend(eq_sma_short: f64, eq_sma_long: f64) -> bool {
    eq_sma_short < EQUITY_DOWNTREND_FACTOR * eq_sma_long
}

/// Both yesterday's close and today's open sit 3% above the year SMA.
pub fn equity_above_year_trend(
    equity_close_yesterday: f64,
    equity_open_today: f64,
    eq_sma_year: f64,
) -> bool {
    equity_close_yesterday > YEAR_ABOVE_FACTOR * eq_sma_year
        && equity_open_today > YEAR_ABOVE_FACTOR * eq_sma_year
}

/// Either yesterday's close or today's open sits 1% below the year SMA.
pub fn equity_below_year_trend(
    equity_close_yesterday: f64,
    equity_open_today: f64,
    eq_sma_year: f64,
) -> bool {
    equity_close_yesterday < YEAR_BELOW_FACTOR * eq_sma_year
        || equity_open_today < YEAR_BELOW_FACTOR * eq_sma_year
}

pub fn vol_extreme_high(vol_close_yesterday: f64, vol_open_today: f64) -> bool {
    vol_close_yesterday > VOL_EXTREME_LEVEL && vol_open_today > VOL_EXTREME_LEVEL
}

pub fn vol_moderate(vol_close_yesterday: f64, vol_open_today: f64) -> bool {
    vol_close_yesterday < VOL_MODERATE_LEVEL && vol_open_today < VOL_MODERATE_LEVEL
}

pub fn vol_low_with_gap_up(vol_open_today: f64, equity_gap_up: bool) -> bool {
    vol_open_today < VOL_LOW_LEVEL && equity_gap_up
}

pub fn vol_elevated_or_gap_down(vol_open_today: f64, equity_gap_down: bool) -> bool {
    vol_open_today > VOL_ELEVATED_LEVEL || equity_gap_down
}

pub fn vol_high(vol_open_today: f64, vol_close_yesterday: f64) -> bool {
    vol_open_today > VOL_HIGH_LEVEL || vol_close_yesterday > VOL_HIGH_LEVEL
}

/// High volatility that is already coming down.
pub fn rebound_signal(vol_high: bool, vol_down_today: bool, vol_smooth_down: bool) -> bool {
    vol_high && vol_down_today && vol_smooth_down
}

/// High volatility that is still rising.
pub fn danger_signal(vol_high: bool, vol_spike: bool, vol_sell_pressure: bool) -> bool {
    vol_high && (vol_spike || vol_sell_pressure)
}

pub fn leverage_condition(
    equity_above_year_trend: bool,
    equity_uptrend: bool,
    vol_low_with_gap_up: bool,
    vol_extreme_high: bool,
) -> bool {
    equity_above_year_trend || (equity_uptrend && vol_low_with_gap_up) || vol_extreme_high
}

pub fn safe_condition(
    equity_below_year_trend: bool,
    equity_downtrend: bool,
    vol_elevated_or_gap_down: bool,
    vol_moderate: bool,
) -> bool {
    equity_below_year_trend && (equity_downtrend || vol_elevated_or_gap_down) && vol_moderate
}

/// Truth value of every predicate for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSet {
    pub equity_gap_up: bool,
    pub equity_gap_down: bool,
    pub vol_spike: bool,
    pub vol_sell_pressure: bool,
    pub vol_down_today: bool,
    pub vol_mildly_down_today: bool,
    pub vol_smooth_down: bool,
    pub vol_smooth_down_extreme: bool,
    pub no_safety_needed: bool,
    pub equity_uptrend: bool,
    pub equity_downtrend: bool,
    pub equity_above_year_trend: bool,
    pub equity_below_year_trend: bool,
    pub vol_extreme_high: bool,
    pub vol_moderate: bool,
    pub vol_low_with_gap_up: bool,
    pub vol_elevated_or_gap_down: bool,
    pub vol_high: bool,
    pub rebound_signal: bool,
    pub danger_signal: bool,
    pub leverage_condition: bool,
    pub safe_condition: bool,
}

impl ConditionSet {
    pub fn evaluate(
        yesterday: &DailyBar,
        opens: &OpeningPrices,
        indicators: &IndicatorSnapshot,
    ) -> Self {
        let eq_open = opens.equity;
        let vol_open = opens.volatility;
        let eq_close = yesterday.equity_close;
        let vol_close = yesterday.vol_close;

        let gap_up = equity_gap_up(eq_open, eq_close);
        let gap_down = equity_gap_down(eq_open, eq_close);
        let spike = vol_spike(indicators.vol_change_vs_open, indicators.vol_change_vs_close);
        let sell_pressure =
            vol_sell_pressure(indicators.vol_sma_short, indicators.vol_sma_long, vol_open);
        let down_today = vol_down_today(indicators.vol_change_vs_close);
        let mildly_down_today = vol_mildly_down_today(indicators.vol_change_vs_close);
        let smooth_down = vol_smooth_down(indicators.vol_smooth_short, indicators.vol_smooth_long);
        let smooth_down_extreme = vol_smooth_down_extreme(
            indicators.vol_smooth_short,
            indicators.vol_smooth_long,
            vol_close,
            vol_open,
        );
        let uptrend = equity_uptrend(indicators.eq_sma_short, indicators.eq_sma_long);
        let downtrend = equity_downtrend(indicators.eq_sma_short, indicators.eq_sma_long);
        let above_year = equity_above_year_trend(eq_close, eq_open, indicators.eq_sma_year);
        let below_year = equity_below_year_trend(eq_close, eq_open, indicators.eq_sma_year);
        let extreme_high = vol_extreme_high(vol_close, vol_open);
        let moderate = vol_moderate(vol_close, vol_open);
        let low_with_gap_up = vol_low_with_gap_up(vol_open, gap_up);
        let elevated_or_gap_down = vol_elevated_or_gap_down(vol_open, gap_down);
        let high = vol_high(vol_open, vol_close);

        Self {
            equity_gap_up: gap_up,
            equity_gap_down: gap_down,
            vol_spike: spike,
            vol_sell_pressure: sell_pressure,
            vol_down_today: down_today,
            vol_mildly_down_today: mildly_down_today,
            vol_smooth_down: smooth_down,
            vol_smooth_down_extreme: smooth_down_extreme,
            no_safety_needed: no_safety_needed(mildly_down_today, smooth_down_extreme),
            equity_uptrend: uptrend,
            equity_downtrend: downtrend,
            equity_above_year_trend: above_year,
            equity_below_year_trend: below_year,
            vol_extreme_high: extreme_high,
            vol_moderate: moderate,
            vol_low_with_gap_up: low_with_gap_up,
            vol_elevated_or_gap_down: elevated_or_gap_down,
            vol_high: high,
            rebound_signal: rebound_signal(high, down_today, smooth_down),
            danger_signal: danger_signal(high, spike, sell_pressure),
            leverage_condition: leverage_condition(
                above_year,
                uptrend,
                low_with_gap_up,
                extreme_high,
            ),
            safe_condition: safe_condition(below_year, downtrend, elevated_or_gap_down, moderate),
        }
    }
}
