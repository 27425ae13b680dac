//! Unit tests for the signal engine

use crate::fixtures::{opens, scenario_params, uptrend};
use levrot::error::EngineError;
use levrot::models::{DecisionBranch, Signal, StrategyParameters};
use levrot::signals::engine::evaluate;
use levrot::signals::SignalEngine;

fn engine() -> SignalEngine {
    SignalEngine::new(scenario_params()).unwrap()
}

#[test]
fn test_engine_rejects_zero_window() {
    let params = StrategyParameters {
        sma_long: 0,
        ..scenario_params()
    };
    assert!(matches!(
        SignalEngine::new(params),
        Err(EngineError::InvalidWindow { name: "sma_long" })
    ));
}

#[test]
fn test_engine_rejects_blank_safe_asset() {
    let params = StrategyParameters {
        preferred_safe_asset: String::new(),
        ..scenario_params()
    };
    assert!(matches!(
        SignalEngine::new(params),
        Err(EngineError::EmptySafeAsset)
    ));
}

#[test]
fn test_insufficient_history_is_safe() {
    let history = uptrend(155);
    let evaluation = engine()
        .evaluate_with_indicators(&history, opens(450.0, 18.5))
        .unwrap();

    assert_eq!(evaluation.signal, Signal::Safe);
    assert_eq!(evaluation.branch, DecisionBranch::InsufficientHistory);
    assert_eq!(evaluation.available, 155);
    assert_eq!(evaluation.required, 156);
    assert!(evaluation.indicators.is_none());
    assert!(evaluation.conditions.is_none());
}

#[test]
fn test_insufficient_history_ignores_invalid_opens() {
    let history = uptrend(10);
    assert_eq!(
        engine().evaluate(&history, opens(f64::NAN, -1.0)),
        Ok(Signal::Safe)
    );
    assert_eq!(engine().evaluate(&[], opens(0.0, 0.0)), Ok(Signal::Safe));
}

#[test]
fn test_minimum_history_runs_rules() {
    let history = uptrend(156);
    let evaluation = engine()
        .evaluate_with_indicators(&history, opens(450.0, 18.5))
        .unwrap();

    assert_eq!(evaluation.signal, Signal::Leveraged);
    assert_eq!(evaluation.branch, DecisionBranch::LeverageCascade);
    assert!(evaluation.indicators.is_some());
}

#[test]
fn test_nan_open_rejected() {
    let history = uptrend(200);
    assert!(matches!(
        engine().evaluate(&history, opens(f64::NAN, 18.5)),
        Err(EngineError::NonFinite {
            field: "equity_open_today",
            ..
        })
    ));
}

#[test]
fn test_zero_vol_open_rejected() {
    let history = uptrend(200);
    assert!(matches!(
        engine().evaluate(&history, opens(450.0, 0.0)),
        Err(EngineError::NonPositive {
            field: "vol_open_today",
            ..
        })
    ));
}

#[test]
fn test_nan_close_inside_window_rejected() {
    let mut history = uptrend(200);
    history[190].equity_close = f64::NAN;
    let date = history[190].date;

    assert_eq!(
        engine().evaluate(&history, opens(450.0, 18.5)),
        Err(EngineError::NonFinite {
            field: "equity_close",
            date: Some(date),
        })
    );
}

#[test]
fn test_nan_close_outside_windows_ignored() {
    let mut history = uptrend(200);
    history[0].equity_close = f64::NAN;
    history[0].vol_close = f64::NAN;

    assert_eq!(
        engine().evaluate(&history, opens(450.0, 18.5)),
        Ok(Signal::Leveraged)
    );
}

#[test]
fn test_zero_vol_close_yesterday_rejected() {
    let mut history = uptrend(200);
    history[199].vol_close = 0.0;

    assert!(matches!(
        engine().evaluate(&history, opens(450.0, 18.5)),
        Err(EngineError::NonPositive {
            field: "vol_close",
            ..
        })
    ));
}

#[test]
fn test_underfilled_window_saturates_without_error() {
    let params = StrategyParameters {
        sma_long: 300,
        ..scenario_params()
    };
    let engine = SignalEngine::new(params).unwrap();
    let evaluation = engine
        .evaluate_with_indicators(&uptrend(200), opens(450.0, 18.5))
        .unwrap();

    let indicators = evaluation.indicators.unwrap();
    assert_eq!(indicators.eq_sma_long, 0.0);
    assert!(evaluation.conditions.unwrap().equity_uptrend);
}

#[test]
fn test_evaluation_is_deterministic() {
    let history = uptrend(200);
    let engine = engine();
    let first = engine
        .evaluate_with_indicators(&history, opens(450.0, 18.5))
        .unwrap();
    let second = engine
        .evaluate_with_indicators(&history, opens(450.0, 18.5))
        .unwrap();

    assert_eq!(first, second);
    assert!(first
        .indicators
        .unwrap()
        .bit_identical(&second.indicators.unwrap()));
}

#[test]
fn test_one_shot_evaluate_matches_engine() {
    let history = uptrend(200);
    let params = scenario_params();
    assert_eq!(
        evaluate(&history, 18.5, 450.0, &params),
        engine().evaluate(&history, opens(450.0, 18.5))
    );
}

#[test]
fn test_one_shot_evaluate_validates_params() {
    let params = StrategyParameters {
        sma_year: 0,
        ..scenario_params()
    };
    assert_eq!(
        evaluate(&uptrend(200), 18.5, 450.0, &params),
        Err(EngineError::InvalidWindow { name: "sma_year" })
    );
}
