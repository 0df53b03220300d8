//! Priority-ordered search: uniform-cost with the zero heuristic, A* with
//! an admissible one.

use std::collections::HashMap;

use crate::contract::{GoalRecord, SearchState, SearchStrategy};
use crate::entry::{predecessor_path, SearchEntry};
use crate::frontier::BestFirstFrontier;
use crate::heuristic::{Heuristic, ZeroHeuristic};
use crate::stats::{SearchStats, Termination};

/// Traversal ordered by `total_cost + heuristic_estimate` over a
/// [`BestFirstFrontier`].
///
/// The goal test happens when the goal is popped, not when it is first
/// generated; with an admissible heuristic this makes the returned path
/// cost-optimal. The best-parent map is rewritten whenever a cheaper path
/// to a state is accepted, so path reconstruction always follows the
/// cheapest known route.
pub struct BestFirstSearch<S, H = ZeroHeuristic> {
    root: S,
    goal: S,
    heuristic: H,
    outcome: Option<GoalRecord<S>>,
    stats: SearchStats,
}

impl<S: SearchState> BestFirstSearch<S> {
    /// Construct a uniform-cost search from `root` to `goal`.
    pub fn new(root: S, goal: S) -> Self {
        Self::with_heuristic(root, goal, ZeroHeuristic)
    }
}

impl<S: SearchState, H: Heuristic<S>> BestFirstSearch<S, H> {
    /// Construct a heuristic-guided search. Cost-optimality requires
    /// `heuristic` to be admissible.
    pub fn with_heuristic(root: S, goal: S, heuristic: H) -> Self {
        Self {
            root,
            goal,
            heuristic,
            outcome: None,
            stats: SearchStats::default(),
        }
    }
}

impl<S: SearchState, H: Heuristic<S>> SearchStrategy<S> for BestFirstSearch<S, H> {
    fn search(&mut self) {
        self.outcome = None;
        self.stats = SearchStats::default();

        let mut frontier: BestFirstFrontier<S> = BestFirstFrontier::new();
        let mut parents: HashMap<S, Option<S>> = HashMap::new();

        let estimate = self.heuristic.estimate(&self.root);
        parents.insert(self.root.clone(), None);
        frontier.push(SearchEntry::root(self.root.clone(), estimate, ()));
        self.stats.generated = 1;

        while let Some(entry) = frontier.pop() {
            if entry.state == self.goal {
                let path = predecessor_path(&parents, &entry.state);
                self.outcome = Some(GoalRecord {
                    depth: entry.depth,
                    cost: entry.total_cost,
                    path,
                });
                self.stats.termination = Termination::GoalReached;
                self.stats.frontier_high_water = frontier.high_water();
                return;
            }

            self.stats.expansions += 1;
            for successor in entry.state.successors() {
                let edge_cost = entry.state.edge_cost(&successor);
                let estimate = self.heuristic.estimate(&successor);
                let child =
                    SearchEntry::successor(&entry, successor.clone(), edge_cost, estimate, ());
                if frontier.push(child) {
                    parents.insert(successor, Some(entry.state.clone()));
                    self.stats.generated += 1;
                } else {
                    self.stats.duplicates_suppressed += 1;
                }
            }
        }

        self.stats.termination = Termination::FrontierExhausted;
        self.stats.frontier_high_water = frontier.high_water();
    }

    fn outcome(&self) -> Option<&GoalRecord<S>> {
        self.outcome.as_ref()
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
