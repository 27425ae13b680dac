//! Unit tests for signal types

use levrot::error::EngineError;
use levrot::models::{DecisionBranch, OpeningPrices, Signal};

#[test]
fn test_signal_codes() {
    assert_eq!(Signal::Safe.code(), -1);
    assert_eq!(Signal::Leveraged.code(), 1);
    assert_eq!(Signal::from_code(-1), Some(Signal::Safe));
    assert_eq!(Signal::from_code(1), Some(Signal::Leveraged));
    assert_eq!(Signal::from_code(0), None);
}

#[test]
fn test_signal_display_and_serde() {
    assert_eq!(Signal::Safe.to_string(), "SAFE");
    assert_eq!(Signal::Leveraged.to_string(), "LEVERAGED");
    assert_eq!(serde_json::to_string(&Signal::Leveraged).unwrap(), "\"LEVERAGED\"");
    assert_eq!(
        serde_json::from_str::<Signal>("\"SAFE\"").unwrap(),
        Signal::Safe
    );
    assert_eq!(
        serde_json::to_string(&DecisionBranch::InsufficientHistory).unwrap(),
        "\"insufficient_history\""
    );
}

#[test]
fn test_opening_prices_validation() {
    assert!(OpeningPrices::new(450.0, 18.5).is_ok());

    assert!(matches!(
        OpeningPrices::new(f64::NAN, 18.5),
        Err(EngineError::NonFinite {
            field: "equity_open_today",
            date: None
        })
    ));
    assert!(matches!(
        OpeningPrices::new(450.0, f64::INFINITY),
        Err(EngineError::NonFinite {
            field: "vol_open_today",
            ..
        })
    ));
    assert!(matches!(
        OpeningPrices::new(0.0, 18.5),
        Err(EngineError::NonPositive {
            field: "equity_open_today",
            ..
        })
    ));
    assert!(matches!(
        OpeningPrices::new(450.0, -1.0),
        Err(EngineError::NonPositive {
            field: "vol_open_today",
            ..
        })
    ));
}
