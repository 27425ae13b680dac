//! Shared data models spanning the engine layers.

pub mod bar;
pub mod indicators;
pub mod signal;
pub mod strategy;

pub use bar::{DailyBar, HistoricalSeries, PriceSeries};
pub use indicators::IndicatorSnapshot;
pub use signal::{DecisionBranch, OpeningPrices, SafeAssetChoice, Signal, SignalRecord};
pub use strategy::{StrategyParameters, REFERENCE_SMA_WINDOW};
