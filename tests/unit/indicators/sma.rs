//! Unit tests for the SMA indicator

use crate::fixtures::{flat_bars, uptrend};
use levrot::indicators::trend::{is_underfilled, sma, sma_of};
use levrot::models::PriceSeries;

#[test]
fn test_sma_uses_trailing_window() {
    let prices = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(sma(&prices, 3), 4.0);
    assert_eq!(sma(&prices, 5), 3.0);
    assert_eq!(sma(&prices, 1), 5.0);
}

#[test]
fn test_sma_underfilled_window_is_zero() {
    assert_eq!(sma(&[10.0, 20.0], 3), 0.0);
    assert_eq!(sma(&[], 1), 0.0);
}

#[test]
fn test_sma_zero_window_is_zero() {
    assert_eq!(sma(&[10.0, 20.0], 0), 0.0);
    assert!(is_underfilled(2, 0));
}

#[test]
fn test_sma_exact_window_length() {
    assert_eq!(sma(&[2.0, 4.0, 6.0], 3), 4.0);
    assert!(!is_underfilled(3, 3));
    assert!(is_underfilled(2, 3));
}

#[test]
fn test_sma_of_matches_extracted_series() {
    let bars = uptrend(200);
    for series in [
        PriceSeries::EquityClose,
        PriceSeries::VolatilityClose,
        PriceSeries::ReferenceClose,
    ] {
        let values = series.extract(&bars);
        for window in [1, 5, 15, 100, 155, 200, 201] {
            assert_eq!(
                sma_of(&bars, series, window).to_bits(),
                sma(&values, window).to_bits(),
                "{} window {}",
                series.name(),
                window
            );
        }
    }
}

#[test]
fn test_sma_of_constant_series() {
    let bars = flat_bars(160, 400.0, 20.0);
    assert_eq!(sma_of(&bars, PriceSeries::EquityClose, 155), 400.0);
    assert_eq!(sma_of(&bars, PriceSeries::VolatilityClose, 9), 20.0);
    assert_eq!(sma_of(&bars, PriceSeries::ReferenceClose, 100), 180.0);
}

#[test]
fn test_sma_of_saturates_like_sma() {
    let bars = flat_bars(10, 400.0, 20.0);
    assert_eq!(sma_of(&bars, PriceSeries::EquityClose, 0), 0.0);
    assert_eq!(sma_of(&bars, PriceSeries::EquityClose, 11), 0.0);
    assert_eq!(sma_of(&bars[..0], PriceSeries::VolatilityClose, 1), 0.0);
    assert_eq!(sma_of(&bars, PriceSeries::VolatilityClose, 10), 20.0);
}
