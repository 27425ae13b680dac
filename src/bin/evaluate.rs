//! Levrot evaluator
//!
//! Usage:
//!   evaluate <bars.json> <equity_open> <volatility_open> [YYYY-MM-DD]
//!   evaluate <bars.json> replay
//!   evaluate <bars.json> backtest
//!
//! `bars.json` is a date-ascending array of daily bars. Without a date, the
//! signal is computed for the day after the last bar. Output is JSON on stdout;
//! logs go to stderr.

use chrono::{Days, NaiveDate};
use dotenvy::dotenv;
use levrot::config::Config;
use levrot::logging;
use levrot::models::{HistoricalSeries, OpeningPrices};
use levrot::services::{
    InMemoryIndicatorStore, InMemoryMarketData, InMemorySettings, InMemorySignalHistory,
    StrategyCalculationService,
};
use levrot::signals::{backtest, replay, SignalEngine};
use std::env;
use std::sync::Arc;
use tracing::info;

const USAGE: &str = "usage: evaluate <bars.json> <equity_open> <volatility_open> [YYYY-MM-DD]
       evaluate <bars.json> replay
       evaluate <bars.json> backtest";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let config = Config::from_env()?;
    logging::init_logging(&config.environment);
    info!(environment = %config.environment, "Starting levrot evaluator");

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(path) = args.first() else {
        return Err(USAGE.into());
    };

    let raw = tokio::fs::read_to_string(path).await?;
    let series: HistoricalSeries = serde_json::from_str(&raw)?;
    info!(bars = series.len(), path = %path, "Loaded bar series");

    match args.get(1).map(String::as_str) {
        Some("replay") => {
            let engine = SignalEngine::new(config.parameters)?;
            let records = replay(&engine, &series)?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Some("backtest") => {
            let engine = SignalEngine::new(config.parameters)?;
            let report = backtest(&engine, &series, &config.backtest)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Some(equity) => {
            let volatility = args.get(2).ok_or(USAGE)?;
            let opens = OpeningPrices::new(equity.parse()?, volatility.parse()?)?;
            let today = match args.get(3) {
                Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")?,
                None => series
                    .last()
                    .and_then(|bar| bar.date.checked_add_days(Days::new(1)))
                    .ok_or("bar series is empty; pass a date explicitly")?,
            };

            let service = StrategyCalculationService::new(
                Arc::new(InMemoryMarketData::new(series)),
                Arc::new(InMemorySignalHistory::new()),
                Arc::new(InMemoryIndicatorStore::new()),
                Arc::new(InMemorySettings::new(config.parameters)),
            )
            .with_lookback_years(config.lookback_years);

            let outcome = service.calculate(today, opens).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        None => return Err(USAGE.into()),
    }

    Ok(())
}
