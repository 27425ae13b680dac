//! SMA (Simple Moving Average) indicator

use crate::models::bar::{DailyBar, PriceSeries};

/// Arithmetic mean of the last `window` prices.
///
/// Returns `0.0` when fewer than `window` prices are available (or when
/// `window` is zero) instead of failing. The rule cascade sees that zero as
/// a real average, so `price > sma` holds trivially for an underfilled window.
///
/// Sums left to right and divides once so identical inputs give identical bits.
pub fn sma(prices: &[f64], window: usize) -> f64 {
    if window == 0 || prices.len() < window {
        return 0.0;
    }

    let mut sum = 0.0;
    for price in &prices[prices.len() - window..] {
        sum += price;
    }
    sum / window as f64
}

/// SMA of one close series of the bars.
pub fn sma_of(bars: &[DailyBar], series: PriceSeries, window: usize) -> f64 {
    let start = bars.len().saturating_sub(window);
    sma(&series.extract(&bars[start..]), window)
}

/// True when `window` exceeds the available prices and [`sma`] would saturate
/// to zero.
pub fn is_underfilled(available: usize, window: usize) -> bool {
    window == 0 || available < window
}
