//! Aggregate counters describing one `search()` run.

use serde_json::json;

/// Why the last `search()` call stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Termination {
    /// No search has run yet on this instance.
    #[default]
    NotRun,
    /// The goal state was reached.
    GoalReached,
    /// Every reachable entry was processed without reaching the goal.
    FrontierExhausted,
    /// An iterative-deepening depth cap was reached before the goal.
    DepthBudgetExhausted,
}

impl Termination {
    /// Stable lower-snake name used in rendered summaries.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotRun => "not_run",
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::DepthBudgetExhausted => "depth_budget_exhausted",
        }
    }
}

/// Counters for one `search()` run.
///
/// Purely observational: nothing in the traversal loops reads these back.
/// Goal-not-found is recorded here as a [`Termination`], not raised as an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States expanded (successors enumerated and enqueued).
    pub expansions: u64,
    /// Entries created for newly discovered states, the root included.
    pub generated: u64,
    /// Candidates dropped by the strategy's dedup rule: state already
    /// finalized, already on the current path, or no cheaper than the
    /// best known route to it.
    pub duplicates_suppressed: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Depth-limited rounds driven by iterative deepening; 0 for
    /// single-pass strategies.
    pub rounds: u64,
    /// Why the run stopped.
    pub termination: Termination,
}

impl SearchStats {
    /// Render the counters as a JSON value for run summaries.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "expansions": self.expansions,
            "generated": self.generated,
            "duplicates_suppressed": self.duplicates_suppressed,
            "frontier_high_water": self.frontier_high_water,
            "rounds": self.rounds,
            "termination": self.termination.as_str(),
        })
    }
}
