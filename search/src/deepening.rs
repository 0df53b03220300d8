//! Iterative deepening over depth-limited searches.

use crate::contract::{GoalRecord, SearchState, SearchStrategy};
use crate::dfs::{DepthBound, DepthFirstSearch};
use crate::stats::{SearchStats, Termination};

/// Repeated depth-limited search with limits 0, 1, 2, …
///
/// Each round is a fresh, independent re-search from scratch; nothing is
/// carried between rounds, trading recomputation for the depth-first
/// memory footprint. The first successful round's result is adopted, which
/// by construction has the minimum possible depth among all goal-reaching
/// paths.
///
/// With the default unbounded policy the search never terminates when the
/// goal is unreachable at any finite depth; callers needing bounded
/// execution construct via [`capped`](IterativeDeepeningSearch::capped).
pub struct IterativeDeepeningSearch<S> {
    root: S,
    goal: S,
    cap: DepthBound,
    outcome: Option<GoalRecord<S>>,
    stats: SearchStats,
}

impl<S: SearchState> IterativeDeepeningSearch<S> {
    /// Construct an unbounded iterative deepening search.
    pub fn new(root: S, goal: S) -> Self {
        Self::with_cap(root, goal, DepthBound::Unbounded)
    }

    /// Construct an iterative deepening search that gives up once the
    /// depth limit would exceed `max_depth`.
    pub fn capped(root: S, goal: S, max_depth: u32) -> Self {
        Self::with_cap(root, goal, DepthBound::Limited(max_depth))
    }

    fn with_cap(root: S, goal: S, cap: DepthBound) -> Self {
        Self {
            root,
            goal,
            cap,
            outcome: None,
            stats: SearchStats::default(),
        }
    }
}

impl<S: SearchState> SearchStrategy<S> for IterativeDeepeningSearch<S> {
    fn search(&mut self) {
        self.outcome = None;
        self.stats = SearchStats::default();

        let mut limit = 0u32;
        loop {
            if !self.cap.admits(limit) {
                self.stats.termination = Termination::DepthBudgetExhausted;
                return;
            }
            log::debug!("iterative deepening: depth limit {limit}");

            let mut round =
                DepthFirstSearch::depth_limited(self.root.clone(), self.goal.clone(), limit);
            round.search();

            self.stats.rounds += 1;
            self.stats.expansions += round.stats().expansions;
            self.stats.generated += round.stats().generated;
            self.stats.duplicates_suppressed += round.stats().duplicates_suppressed;
            self.stats.frontier_high_water = self
                .stats
                .frontier_high_water
                .max(round.stats().frontier_high_water);

            if round.goal_found() {
                self.outcome = round.take_outcome();
                self.stats.termination = Termination::GoalReached;
                return;
            }
            limit += 1;
        }
    }

    fn outcome(&self) -> Option<&GoalRecord<S>> {
        self.outcome.as_ref()
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
