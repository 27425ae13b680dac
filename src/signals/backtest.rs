//! Historical backtest of the rotation over a stored series.
//!
//! Each replayed day is marked to market using the signals the engine would
//! have produced. `1 - safe_ratio` of capital follows the signal and the rest
//! always sits in the chosen safe asset:
//!
//! | yesterday | today     | signal leg return                         |
//! |-----------|-----------|-------------------------------------------|
//! | LEVERAGED | LEVERAGED | `L * (close / prev_close - 1) - fee`      |
//! | SAFE      | LEVERAGED | `L * (close / open - 1) - fee`            |
//! | LEVERAGED | SAFE      | `L * (open / prev_close - 1) - fee`       |
//! | SAFE      | SAFE      | safe asset `close / prev_close - 1`       |
//!
//! `fee` is the annual management fee spread over 252 trading days. A day on
//! which the signal changes pays `2 * commission` on the signal leg.

use crate::error::EngineError;
use crate::models::bar::DailyBar;
use crate::models::signal::{SafeAssetChoice, Signal};
use crate::models::strategy::StrategyParameters;
use crate::signals::engine::SignalEngine;
use crate::signals::replay::replay_evaluations;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Capital and cost assumptions for a backtest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BacktestConfig {
    pub initial_capital: f64,
    /// Per-side commission as a fraction of the traded leg.
    pub commission: f64,
    /// Annual fee of the leveraged product.
    pub management_fee: f64,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            initial_capital: 10_000.0,
            commission: 0.008,
            management_fee: 0.0095,
        }
    }
}

impl BacktestConfig {
    pub fn daily_fee(&self) -> f64 {
        self.management_fee / TRADING_DAYS_PER_YEAR
    }
}

/// One marked-to-market day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BacktestDay {
    pub date: NaiveDate,
    pub signal: Signal,
    pub safe_asset: SafeAssetChoice,
    pub trade_day: bool,
    pub strategy_return: f64,
    pub nav: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BacktestReport {
    pub days: Vec<BacktestDay>,
    pub final_nav: f64,
    pub total_return: f64,
    pub trades: usize,
    /// Largest peak-to-trough NAV decline as a non-positive fraction.
    pub max_drawdown: f64,
}

/// Run the engine over `bars` and compound the daily strategy returns.
///
/// The position before the first replayed day is SAFE. Days without enough
/// history for a safe asset choice park the safe sleeve in the reserve asset.
pub fn backtest(
    engine: &SignalEngine,
    bars: &[DailyBar],
    config: &BacktestConfig,
) -> Result<BacktestReport, EngineError> {
    if !(config.initial_capital.is_finite() && config.initial_capital > 0.0) {
        return Err(EngineError::NonPositive {
            field: "initial_capital",
            value: config.initial_capital,
            date: None,
        });
    }
    if let Some(first) = bars.first() {
        check_prices(first)?;
    }

    let evaluations = replay_evaluations(engine, bars)?;
    let params = engine.params();

    let mut previous = Signal::Safe;
    let mut nav = config.initial_capital;
    let mut peak = nav;
    let mut max_drawdown = 0.0_f64;
    let mut trades = 0;
    let mut days = Vec::with_capacity(evaluations.len());

    for (pair, evaluation) in bars.windows(2).zip(evaluations) {
        let (yesterday, today) = (&pair[0], &pair[1]);
        check_prices(today)?;

        let safe_asset = evaluation.safe_asset.unwrap_or(SafeAssetChoice::Reserve);
        let strategy_return = daily_return(
            previous,
            evaluation.signal,
            yesterday,
            today,
            safe_asset,
            params,
            config,
        );

        let trade_day = previous != evaluation.signal;
        if trade_day {
            trades += 1;
            debug!(
                date = %today.date,
                from = %previous,
                to = %evaluation.signal,
                "backtest: trade"
            );
        }

        nav *= 1.0 + strategy_return;
        peak = peak.max(nav);
        max_drawdown = max_drawdown.min(nav / peak - 1.0);
        previous = evaluation.signal;

        days.push(BacktestDay {
            date: today.date,
            signal: evaluation.signal,
            safe_asset,
            trade_day,
            strategy_return,
            nav,
        });
    }

    let total_return = nav / config.initial_capital - 1.0;
    info!(
        days = days.len(),
        trades,
        final_nav = nav,
        total_return,
        max_drawdown,
        "backtest complete"
    );

    Ok(BacktestReport {
        days,
        final_nav: nav,
        total_return,
        trades,
        max_drawdown,
    })
}

/// Strategy return for `today` when moving from `previous` to `signal`.
///
/// Includes the commission when the signal changes. Prices are assumed to be
/// positive; [`backtest`] checks them before calling.
pub fn daily_return(
    previous: Signal,
    signal: Signal,
    yesterday: &DailyBar,
    today: &DailyBar,
    safe_asset: SafeAssetChoice,
    params: &StrategyParameters,
    config: &BacktestConfig,
) -> f64 {
    let leverage = params.target_leverage;
    let fee = config.daily_fee();
    let signal_weight = 1.0 - params.safe_ratio;

    let safe_return = match safe_asset {
        SafeAssetChoice::Reference => today.reference_close / yesterday.reference_close - 1.0,
        SafeAssetChoice::Reserve => today.reserve_close / yesterday.reserve_close - 1.0,
    };

    let signal_return = match (previous, signal) {
        (Signal::Leveraged, Signal::Leveraged) => {
            leverage * (today.equity_close / yesterday.equity_close - 1.0) - fee
        }
        (Signal::Safe, Signal::Leveraged) => {
            leverage * (today.equity_close / today.equity_open - 1.0) - fee
        }
        (Signal::Leveraged, Signal::Safe) => {
            leverage * (today.equity_open / yesterday.equity_close - 1.0) - fee
        }
        (Signal::Safe, Signal::Safe) => safe_return,
    };

    let mut strategy_return = signal_return * signal_weight + safe_return * params.safe_ratio;
    if previous != signal {
        strategy_return -= config.commission * 2.0 * signal_weight;
    }
    strategy_return
}

/// Prices a day's return reads must be finite and positive.
fn check_prices(bar: &DailyBar) -> Result<(), EngineError> {
    for (field, value) in [
        ("equity_open", bar.equity_open),
        ("equity_close", bar.equity_close),
        ("reference_close", bar.reference_close),
        ("reserve_close", bar.reserve_close),
    ] {
        if !value.is_finite() {
            return Err(EngineError::NonFinite {
                field,
                date: Some(bar.date),
            });
        }
        if value <= 0.0 {
            return Err(EngineError::NonPositive {
                field,
                value,
                date: Some(bar.date),
            });
        }
    }
    Ok(())
}
