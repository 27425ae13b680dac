//! Volatility indicators: open-to-open and open-to-close shock ratios

pub mod change;

pub use change::*;
