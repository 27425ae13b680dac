//! Indicator calculators feeding the rule cascade.

pub mod snapshot;
pub mod trend;
pub mod volatility;

pub use snapshot::compute_snapshot;
pub use trend::*;
pub use volatility::*;
