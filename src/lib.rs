//! Daily allocation signal for a leveraged-equity / safe-asset rotation.
//!
//! The engine turns a date-ordered series of daily bars plus today's opening
//! prices into moving-average indicators and a discrete [`models::Signal`].
//! Everything around it (market data, signal history, settings) is reached
//! through the collaborator traits in [`services`].

pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{EngineError, SeriesError};
pub use models::{
    DailyBar, HistoricalSeries, IndicatorSnapshot, OpeningPrices, SafeAssetChoice, Signal,
    StrategyParameters,
};
pub use signals::engine::SignalEngine;
