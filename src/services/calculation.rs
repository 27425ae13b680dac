//! Daily strategy calculation
//!
//! Loads the settings and the lookback window of bars, runs the engine for
//! today's opens, stores the indicator snapshot and records the resulting
//! signal together with whether it changed the position.

use crate::models::signal::{OpeningPrices, SignalRecord};
use crate::services::error::ServiceError;
use crate::services::indicator_store::IndicatorStore;
use crate::services::market_data::MarketDataRepository;
use crate::services::signal_store::{SettingsStore, SignalHistoryStore};
use crate::signals::engine::{Evaluation, SignalEngine};
use crate::signals::position::position_changed;
use chrono::{Months, NaiveDate};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_LOOKBACK_YEARS: u32 = 2;

/// What one calculation stored and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationOutcome {
    pub record: SignalRecord,
    pub evaluation: Evaluation,
}

pub struct StrategyCalculationService {
    market_data: Arc<dyn MarketDataRepository>,
    history: Arc<dyn SignalHistoryStore>,
    indicators: Arc<dyn IndicatorStore>,
    settings: Arc<dyn SettingsStore>,
    lookback_years: u32,
}

impl StrategyCalculationService {
    pub fn new(
        market_data: Arc<dyn MarketDataRepository>,
        history: Arc<dyn SignalHistoryStore>,
        indicators: Arc<dyn IndicatorStore>,
        settings: Arc<dyn SettingsStore>,
    ) -> Self {
        Self {
            market_data,
            history,
            indicators,
            settings,
            lookback_years: DEFAULT_LOOKBACK_YEARS,
        }
    }

    pub fn with_lookback_years(mut self, years: u32) -> Self {
        self.lookback_years = years;
        self
    }

    pub fn lookback_years(&self) -> u32 {
        self.lookback_years
    }

    /// Window of bars the engine sees for `today`: `[today - lookback, today)`.
    pub fn history_window(
        &self,
        today: NaiveDate,
    ) -> Result<(NaiveDate, NaiveDate), ServiceError> {
        let start = today
            .checked_sub_months(Months::new(self.lookback_years.saturating_mul(12)))
            .ok_or(ServiceError::LookbackOutOfRange {
                years: self.lookback_years,
            })?;
        Ok((start, today))
    }

    /// Compute and store the signal for `today`.
    ///
    /// A bar already ingested for `today` is not part of the history, so the
    /// last bar seen is always yesterday's. Running twice for the same date
    /// replaces the stored record. The snapshot is stored under the date of
    /// the last bar it was computed from; insufficient history stores none.
    pub async fn calculate(
        &self,
        today: NaiveDate,
        opens: OpeningPrices,
    ) -> Result<CalculationOutcome, ServiceError> {
        opens.validate()?;

        let params = self.settings.load().await?;
        let engine = SignalEngine::new(params)?;

        let (start, end) = self.history_window(today)?;
        let bars = self.market_data.bars_between(start, end).await?;
        if bars.is_empty() {
            return Err(ServiceError::NoHistory { start, end });
        }

        debug!(
            date = %today,
            bars = bars.len(),
            start = %start,
            "loaded {} bars for {}",
            bars.len(),
            today
        );

        let evaluation = engine.evaluate_with_indicators(&bars, opens)?;
        if let Some(snapshot) = &evaluation.indicators {
            self.indicators.upsert(snapshot.clone()).await?;
        }

        let previous = self.history.latest_before(today).await?;
        let changed = position_changed(previous.as_ref().map(|r| r.signal), evaluation.signal);

        let record = SignalRecord {
            date: today,
            signal: evaluation.signal,
            branch: evaluation.branch,
            position_changed: changed,
            safe_asset: engine.params().preferred_safe_asset.clone(),
        };
        self.history.insert(record.clone()).await?;

        info!(
            date = %today,
            signal = %record.signal,
            branch = ?record.branch,
            position_changed = changed,
            "signal for {}: {}",
            today,
            record.signal
        );

        Ok(CalculationOutcome { record, evaluation })
    }
}
