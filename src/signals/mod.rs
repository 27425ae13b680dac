//! Signal evaluation: predicates, decision cascade, engine, position tracking
//! and historical replay.

pub mod backtest;
pub mod conditions;
pub mod decision;
pub mod engine;
pub mod position;
pub mod replay;
pub mod safe_asset;

pub use backtest::{backtest, daily_return, BacktestConfig, BacktestDay, BacktestReport};
pub use conditions::ConditionSet;
pub use decision::decide;
pub use engine::{Evaluation, SignalEngine};
pub use position::{position_changed, PositionTracker};
pub use replay::{replay, replay_evaluations};
pub use safe_asset::select_safe_asset;
