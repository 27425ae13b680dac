//! Main signal evaluation engine.

use crate::error::EngineError;
use crate::indicators::snapshot::compute_snapshot;
use crate::indicators::trend::is_underfilled;
use crate::models::bar::{DailyBar, PriceSeries};
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{DecisionBranch, OpeningPrices, SafeAssetChoice, Signal};
use crate::models::strategy::{StrategyParameters, REFERENCE_SMA_WINDOW};
use crate::signals::conditions::ConditionSet;
use crate::signals::decision::decide;
use crate::signals::safe_asset::safe_asset_for;
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of one evaluation with everything that led to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub signal: Signal,
    pub branch: DecisionBranch,
    /// Bars supplied.
    pub available: usize,
    /// Bars needed before the rules run.
    pub required: usize,
    /// `None` when history was insufficient.
    pub indicators: Option<IndicatorSnapshot>,
    pub conditions: Option<ConditionSet>,
    /// Where the safe sleeve sits today; `None` when history was insufficient.
    pub safe_asset: Option<SafeAssetChoice>,
}

impl Evaluation {
    fn insufficient(available: usize, required: usize) -> Self {
        Self {
            signal: Signal::Safe,
            branch: DecisionBranch::InsufficientHistory,
            available,
            required,
            indicators: None,
            conditions: None,
            safe_asset: None,
        }
    }
}

/// Stateless evaluator bound to a validated parameter set.
///
/// Holds no mutable state, so one engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct SignalEngine {
    params: StrategyParameters,
}

impl SignalEngine {
    pub fn new(params: StrategyParameters) -> Result<Self, EngineError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &StrategyParameters {
        &self.params
    }

    /// Signal for today given history ending yesterday.
    pub fn evaluate(
        &self,
        history: &[DailyBar],
        opens: OpeningPrices,
    ) -> Result<Signal, EngineError> {
        self.evaluate_with_indicators(history, opens)
            .map(|evaluation| evaluation.signal)
    }

    /// Evaluate signal and return the indicator snapshot and predicate values
    /// behind it.
    ///
    /// A history shorter than `sma_year + 1` bars yields SAFE for any opening
    /// prices without touching the inputs. Otherwise non-finite values and
    /// non-positive opens or volatility denominators are rejected.
    pub fn evaluate_with_indicators(
        &self,
        history: &[DailyBar],
        opens: OpeningPrices,
    ) -> Result<Evaluation, EngineError> {
        let required = self.params.required_history();
        if history.len() < required {
            warn!(
                available = history.len(),
                required,
                "not enough history to evaluate ({} < {}), defaulting to SAFE",
                history.len(),
                required
            );
            return Ok(Evaluation::insufficient(history.len(), required));
        }

        if let Err(err) = opens.validate().and_then(|_| self.validate_history(history)) {
            warn!(error = %err, "rejected evaluation input");
            return Err(err);
        }
        self.warn_underfilled(history.len());

        let (Some(indicators), Some(yesterday)) = (
            compute_snapshot(history, &self.params, opens.volatility),
            history.last(),
        ) else {
            return Ok(Evaluation::insufficient(history.len(), required));
        };

        let conditions = ConditionSet::evaluate(yesterday, &opens, &indicators);
        let (signal, branch) = decide(&conditions);
        let safe_asset = safe_asset_for(yesterday, &indicators);

        debug!(
            date = %indicators.date,
            signal = %signal,
            branch = ?branch,
            safe_condition = conditions.safe_condition,
            rebound_signal = conditions.rebound_signal,
            no_safety_needed = conditions.no_safety_needed,
            danger_signal = conditions.danger_signal,
            leverage_condition = conditions.leverage_condition,
            safe_asset = %safe_asset,
            "evaluated rule cascade"
        );

        Ok(Evaluation {
            signal,
            branch,
            available: history.len(),
            required,
            indicators: Some(indicators),
            conditions: Some(conditions),
            safe_asset: Some(safe_asset),
        })
    }

    /// Check every value the indicators and predicates will read.
    fn validate_history(&self, history: &[DailyBar]) -> Result<(), EngineError> {
        let p = &self.params;
        let equity_window = p.sma_year.max(p.sma_long).max(p.sma_short);
        let vol_window = p
            .vol_sma_short
            .max(p.vol_sma_long)
            .max(p.vol_smooth_short)
            .max(p.vol_smooth_long);

        for (series, window) in [
            (PriceSeries::EquityClose, equity_window),
            (PriceSeries::VolatilityClose, vol_window),
            (PriceSeries::ReferenceClose, REFERENCE_SMA_WINDOW),
        ] {
            let start = history.len().saturating_sub(window);
            for bar in &history[start..] {
                if !series.value(bar).is_finite() {
                    return Err(EngineError::NonFinite {
                        field: series.name(),
                        date: Some(bar.date),
                    });
                }
            }
        }

        if let Some(yesterday) = history.last() {
            for (field, value) in [
                ("vol_open", yesterday.vol_open),
                ("vol_close", yesterday.vol_close),
            ] {
                if !value.is_finite() {
                    return Err(EngineError::NonFinite {
                        field,
                        date: Some(yesterday.date),
                    });
                }
                if value <= 0.0 {
                    return Err(EngineError::NonPositive {
                        field,
                        value,
                        date: Some(yesterday.date),
                    });
                }
            }
        }

        Ok(())
    }

    /// Underfilled windows saturate to 0.0 and can force predicates; surface them.
    fn warn_underfilled(&self, available: usize) {
        let reference = ("reference_sma", REFERENCE_SMA_WINDOW);
        let windows = self.params.windows().into_iter().chain(std::iter::once(reference));
        for (name, window) in windows {
            if is_underfilled(available, window) {
                warn!(
                    window_name = name,
                    window,
                    available,
                    "window {} ({}) exceeds available history ({}), SMA saturates to 0.0",
                    name,
                    window,
                    available
                );
            }
        }
    }
}

/// One-shot evaluation: validate `params`, then evaluate.
pub fn evaluate(
    history: &[DailyBar],
    vol_open_today: f64,
    equity_open_today: f64,
    params: &StrategyParameters,
) -> Result<Signal, EngineError> {
    let engine = SignalEngine::new(params.clone())?;
    let opens = OpeningPrices {
        equity: equity_open_today,
        volatility: vol_open_today,
    };
    engine.evaluate(history, opens)
}
