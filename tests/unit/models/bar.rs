//! Unit tests for bars and bar series

use crate::fixtures::{bar, date, uptrend};
use levrot::error::SeriesError;
use levrot::models::{DailyBar, HistoricalSeries};

#[test]
fn test_series_accepts_ascending_dates_with_gaps() {
    let bars = vec![bar(0, 400.0, 20.0), bar(3, 401.0, 21.0), bar(4, 402.0, 22.0)];
    let series = HistoricalSeries::new(bars).unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series.last().unwrap().date, date(4));
}

#[test]
fn test_series_rejects_duplicate_date() {
    let bars = vec![bar(0, 400.0, 20.0), bar(1, 401.0, 21.0), bar(1, 402.0, 22.0)];
    assert_eq!(
        HistoricalSeries::new(bars),
        Err(SeriesError::DuplicateDate(date(1)))
    );
}

#[test]
fn test_series_rejects_out_of_order() {
    let bars = vec![bar(2, 400.0, 20.0), bar(1, 401.0, 21.0)];
    assert_eq!(
        HistoricalSeries::new(bars),
        Err(SeriesError::OutOfOrder {
            previous: date(2),
            next: date(1),
        })
    );
}

#[test]
fn test_from_unordered_sorts_and_keeps_latest_duplicate() {
    let bars = vec![
        bar(2, 402.0, 22.0),
        bar(0, 400.0, 20.0),
        bar(2, 499.0, 29.0),
        bar(1, 401.0, 21.0),
    ];
    let series = HistoricalSeries::from_unordered(bars);

    let dates: Vec<_> = series.iter().map(|b| b.date).collect();
    assert_eq!(dates, vec![date(0), date(1), date(2)]);
    assert_eq!(series[2].equity_close, 499.0);
}

#[test]
fn test_between_is_half_open() {
    let series = HistoricalSeries::new(uptrend(10)).unwrap();

    let window = series.between(date(2), date(5));
    assert_eq!(window.len(), 3);
    assert_eq!(window[0].date, date(2));
    assert_eq!(window[2].date, date(4));

    assert!(series.between(date(5), date(5)).is_empty());
    assert!(series.between(date(7), date(3)).is_empty());
    assert_eq!(series.between(date(0), date(100)).len(), 10);
}

#[test]
fn test_series_json_is_plain_array() {
    let series = HistoricalSeries::new(uptrend(3)).unwrap();
    let json = serde_json::to_value(&series).unwrap();
    assert!(json.is_array());
    assert_eq!(json.as_array().unwrap().len(), 3);

    let back: HistoricalSeries = serde_json::from_value(json).unwrap();
    assert_eq!(back, series);
}

#[test]
fn test_series_json_rejects_unordered_input() {
    let bars = vec![bar(1, 401.0, 21.0), bar(0, 400.0, 20.0)];
    let json = serde_json::to_string(&bars).unwrap();
    assert!(serde_json::from_str::<HistoricalSeries>(&json).is_err());
}

#[test]
fn test_bar_builders() {
    let b = DailyBar::empty(date(0))
        .with_equity(99.0, 100.0, 101.0, 98.0, 5_000.0)
        .with_volatility(19.0, 20.0, 21.0, 18.0)
        .with_reference(178.0, 180.0)
        .with_reserve(79.0, 80.0);

    assert_eq!(b.equity_open, 99.0);
    assert_eq!(b.equity_volume, 5_000.0);
    assert_eq!(b.vol_low, 18.0);
    assert_eq!(b.reference_close, 180.0);
    assert_eq!(b.reserve_open, 79.0);
}
