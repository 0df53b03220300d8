//! An arithmetic state space: increment or double, unit cost per step.

use std::fmt;

use meridian_search::contract::SearchState;

/// Values past this have no successors, keeping exhaustive traversals
/// finite while leaving plenty of room for depth experiments.
pub const COUNTER_CEILING: u64 = 4096;

/// A counter value whose successors are `n + 1` and `n * 2`.
///
/// The space branches enough to make depth limits interesting and is
/// capped at [`COUNTER_CEILING`] so a search for an unreachable value
/// terminates by frontier exhaustion instead of running forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterState(pub u64);

impl fmt::Display for CounterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl SearchState for CounterState {
    fn successors(&self) -> Vec<Self> {
        [self.0.saturating_add(1), self.0.saturating_mul(2)]
            .into_iter()
            .filter(|&next| next <= COUNTER_CEILING)
            .map(CounterState)
            .collect()
    }

    fn edge_cost(&self, _successor: &Self) -> f64 {
        1.0
    }
}
