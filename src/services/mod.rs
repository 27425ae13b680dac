//! Collaborators around the engine (market data, signal history, indicator
//! snapshots, settings) and the service that ties them together for one
//! trading day.

pub mod calculation;
pub mod error;
pub mod indicator_store;
pub mod market_data;
pub mod signal_store;

pub use calculation::{CalculationOutcome, StrategyCalculationService};
pub use error::{RepositoryError, ServiceError};
pub use indicator_store::{InMemoryIndicatorStore, IndicatorStore};
pub use market_data::{InMemoryMarketData, MarketDataRepository};
pub use signal_store::{
    InMemorySettings, InMemorySignalHistory, SettingsStore, SignalHistoryStore,
};
