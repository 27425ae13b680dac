//! Position state machine kept by the caller across trading days.

use crate::models::signal::Signal;

/// A position changes when today's signal differs from the last stored one.
/// With no stored signal the first evaluation always counts as a change.
pub fn position_changed(previous: Option<Signal>, today: Signal) -> bool {
    previous != Some(today)
}

/// Two-state position {SAFE, LEVERAGED} starting from an undefined state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionTracker {
    current: Option<Signal>,
}

impl PositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously persisted signal.
    pub fn resume(previous: Signal) -> Self {
        Self {
            current: Some(previous),
        }
    }

    pub fn current(&self) -> Option<Signal> {
        self.current
    }

    /// Transition to `signal`, returning whether the position changed.
    pub fn observe(&mut self, signal: Signal) -> bool {
        let changed = position_changed(self.current, signal);
        self.current = Some(signal);
        changed
    }
}
