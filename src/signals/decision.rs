//! Final decision over the evaluated predicates.

use crate::models::signal::{DecisionBranch, Signal};
use crate::signals::conditions::ConditionSet;

/// Apply the cascade; the first matching branch wins.
///
/// 1. `(safe AND NOT rebound AND NOT no_safety_needed) OR danger` -> SAFE
/// 2. `(leverage AND NOT danger) OR rebound` -> LEVERAGED
/// 3. otherwise SAFE. Yesterday's signal is not carried forward.
pub fn decide(conditions: &ConditionSet) -> (Signal, DecisionBranch) {
    let c = conditions;

    if (c.safe_condition && !c.rebound_signal && !c.no_safety_needed) || c.danger_signal {
        (Signal::Safe, DecisionBranch::SafeCascade)
    } else if (c.leverage_condition && !c.danger_signal) || c.rebound_signal {
        (Signal::Leveraged, DecisionBranch::LeverageCascade)
    } else {
        (Signal::Safe, DecisionBranch::Fallback)
    }
}
