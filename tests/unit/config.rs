//! Unit tests for environment configuration

use levrot::config::{is_production, Config, ConfigError};
use levrot::error::EngineError;
use levrot::models::StrategyParameters;
use levrot::signals::BacktestConfig;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_empty_environment_gives_defaults() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.environment, "sandbox");
    assert_eq!(config.lookback_years, 2);
    assert_eq!(config.parameters, StrategyParameters::default());
    assert_eq!(config.backtest, BacktestConfig::default());
}

#[test]
fn test_overrides() {
    let config = Config::from_lookup(lookup(&[
        ("ENVIRONMENT", "production"),
        ("SMA_YEAR", "200"),
        ("VOL_SMOOTH_LONG", " 12 "),
        ("SAFE_ASSET", "TLT"),
        ("LOOKBACK_YEARS", "3"),
    ]))
    .unwrap();

    assert_eq!(config.environment, "production");
    assert_eq!(config.parameters.sma_year, 200);
    assert_eq!(config.parameters.vol_smooth_long, 12);
    assert_eq!(config.parameters.preferred_safe_asset, "TLT");
    assert_eq!(config.parameters.sma_short, 5);
    assert_eq!(config.lookback_years, 3);
}

#[test]
fn test_unparsable_value_rejected() {
    let err = Config::from_lookup(lookup(&[("SMA_LONG", "fifteen")])).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue { key: "SMA_LONG", ref value } if value == "fifteen"
    ));
}

#[test]
fn test_negative_window_rejected() {
    assert!(matches!(
        Config::from_lookup(lookup(&[("SMA_SHORT", "-5")])),
        Err(ConfigError::InvalidValue { key: "SMA_SHORT", .. })
    ));
}

#[test]
fn test_zero_window_rejected() {
    assert!(matches!(
        Config::from_lookup(lookup(&[("SMA_YEAR", "0")])),
        Err(ConfigError::Parameters(EngineError::InvalidWindow { name: "sma_year" }))
    ));
}

#[test]
fn test_allocation_and_backtest_overrides() {
    let config = Config::from_lookup(lookup(&[
        ("TARGET_LEVERAGE", "2"),
        ("SAFE_RATIO", "0.35"),
        ("INITIAL_CAPITAL", "25000"),
        ("COMMISSION", "0.001"),
    ]))
    .unwrap();

    assert_eq!(config.parameters.target_leverage, 2.0);
    assert_eq!(config.parameters.safe_ratio, 0.35);
    assert_eq!(config.backtest.initial_capital, 25_000.0);
    assert_eq!(config.backtest.commission, 0.001);
    assert_eq!(config.backtest.management_fee, 0.0095);
}

#[test]
fn test_out_of_range_safe_ratio_rejected() {
    assert!(matches!(
        Config::from_lookup(lookup(&[("SAFE_RATIO", "1.2")])),
        Err(ConfigError::Parameters(EngineError::InvalidAllocation {
            field: "safe_ratio",
            ..
        }))
    ));
    assert!(matches!(
        Config::from_lookup(lookup(&[("TARGET_LEVERAGE", "three")])),
        Err(ConfigError::InvalidValue {
            key: "TARGET_LEVERAGE",
            ..
        })
    ));
}

#[test]
fn test_production_names() {
    assert!(is_production("production"));
    assert!(is_production("prod"));
    assert!(!is_production("sandbox"));
}
