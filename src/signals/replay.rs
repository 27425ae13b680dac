//! Day-by-day replay of the engine over a stored series.

use crate::error::EngineError;
use crate::models::bar::DailyBar;
use crate::models::signal::{OpeningPrices, SignalRecord};
use crate::signals::engine::{Evaluation, SignalEngine};
use crate::signals::position::PositionTracker;
use tracing::{debug, info};

/// Evaluate every bar from the second onward as "today".
///
/// Day `i` sees `bars[..i]` as history and takes its own equity and
/// volatility opens as today's opens. The returned vector is aligned with
/// `bars[1..]`.
pub fn replay_evaluations(
    engine: &SignalEngine,
    bars: &[DailyBar],
) -> Result<Vec<Evaluation>, EngineError> {
    let mut evaluations = Vec::with_capacity(bars.len().saturating_sub(1));
    for (i, today) in bars.iter().enumerate().skip(1) {
        let opens = OpeningPrices {
            equity: today.equity_open,
            volatility: today.vol_open,
        };
        evaluations.push(engine.evaluate_with_indicators(&bars[..i], opens)?);
    }
    Ok(evaluations)
}

/// Replay `bars` into the records a daily run would have stored.
///
/// Early days with too little history come out SAFE. Each record's
/// `position_changed` is relative to the previous replayed day; the first
/// record is always a change.
pub fn replay(engine: &SignalEngine, bars: &[DailyBar]) -> Result<Vec<SignalRecord>, EngineError> {
    let evaluations = replay_evaluations(engine, bars)?;
    let mut tracker = PositionTracker::new();
    let mut records = Vec::with_capacity(evaluations.len());
    let safe_asset = engine.params().preferred_safe_asset.clone();

    for (today, evaluation) in bars.iter().skip(1).zip(evaluations) {
        let changed = tracker.observe(evaluation.signal);

        if changed {
            debug!(
                date = %today.date,
                signal = %evaluation.signal,
                "replay: position changed on {}",
                today.date
            );
        }

        records.push(SignalRecord {
            date: today.date,
            signal: evaluation.signal,
            branch: evaluation.branch,
            position_changed: changed,
            safe_asset: safe_asset.clone(),
        });
    }

    info!(
        days = records.len(),
        changes = records.iter().filter(|r| r.position_changed).count(),
        "replay complete"
    );

    Ok(records)
}
