//! Unit tests for volatility shock ratios

use crate::fixtures::{assert_approx, bar};
use levrot::indicators::volatility::{pct_change, VolatilityShock};

#[test]
fn test_pct_change() {
    assert_eq!(pct_change(25.0, 20.0), 0.25);
    assert_eq!(pct_change(20.0, 20.0), 0.0);
    assert_approx(pct_change(18.0, 20.0), -0.1, 1e-12);
}

#[test]
fn test_shock_against_yesterday_open_and_close() {
    // vol open 19.8, vol close 20
    let yesterday = bar(0, 400.0, 20.0);
    let shock = VolatilityShock::measure(&yesterday, 25.0);

    assert_eq!(shock.vs_close, 0.25);
    assert_approx(shock.vs_open, 25.0 / 19.8 - 1.0, 1e-12);
    assert!(shock.vs_open > shock.vs_close);
}
