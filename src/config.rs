//! Environment-driven configuration
//!
//! Every key is optional and falls back to the defaults of the live strategy.
//! Keys that are present but do not parse are rejected rather than ignored.

use crate::error::EngineError;
use crate::models::strategy::StrategyParameters;
use crate::services::calculation::DEFAULT_LOOKBACK_YEARS;
use crate::signals::backtest::BacktestConfig;
use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid strategy parameters: {0}")]
    Parameters(#[from] EngineError),
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Deployment environment name (`ENVIRONMENT`, default `sandbox`).
    pub environment: String,
    pub lookback_years: u32,
    pub parameters: StrategyParameters,
    pub backtest: BacktestConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            lookback_years: DEFAULT_LOOKBACK_YEARS,
            parameters: StrategyParameters::default(),
            backtest: BacktestConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let p = defaults.parameters;
        let b = defaults.backtest;

        let parameters = StrategyParameters {
            sma_short: parse_or(&lookup, "SMA_SHORT", p.sma_short)?,
            sma_long: parse_or(&lookup, "SMA_LONG", p.sma_long)?,
            vol_sma_short: parse_or(&lookup, "VOL_SMA_SHORT", p.vol_sma_short)?,
            vol_sma_long: parse_or(&lookup, "VOL_SMA_LONG", p.vol_sma_long)?,
            vol_smooth_short: parse_or(&lookup, "VOL_SMOOTH_SHORT", p.vol_smooth_short)?,
            vol_smooth_long: parse_or(&lookup, "VOL_SMOOTH_LONG", p.vol_smooth_long)?,
            sma_year: parse_or(&lookup, "SMA_YEAR", p.sma_year)?,
            preferred_safe_asset: lookup("SAFE_ASSET")
                .map(|s| s.trim().to_string())
                .unwrap_or(p.preferred_safe_asset),
            target_leverage: parse_or(&lookup, "TARGET_LEVERAGE", p.target_leverage)?,
            safe_ratio: parse_or(&lookup, "SAFE_RATIO", p.safe_ratio)?,
        };
        parameters.validate()?;

        let backtest = BacktestConfig {
            initial_capital: parse_or(&lookup, "INITIAL_CAPITAL", b.initial_capital)?,
            commission: parse_or(&lookup, "COMMISSION", b.commission)?,
            management_fee: parse_or(&lookup, "MANAGEMENT_FEE", b.management_fee)?,
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            lookback_years: parse_or(&lookup, "LOOKBACK_YEARS", defaults.lookback_years)?,
            parameters,
            backtest,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
