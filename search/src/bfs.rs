//! Breadth-first search with predecessor-map deduplication.

use std::collections::{HashMap, VecDeque};

use crate::contract::{GoalRecord, SearchState, SearchStrategy};
use crate::entry::{predecessor_path, SearchEntry};
use crate::heuristic::{Heuristic, ZeroHeuristic};
use crate::stats::{SearchStats, Termination};

/// FIFO-ordered traversal that never revisits a state.
///
/// The predecessor map doubles as the visited set: the first entry to be
/// dequeued for a state finalizes it, so each state is recorded via a
/// minimum-depth path. The returned path is therefore depth-optimal, and
/// cost-optimal only when all edge costs are equal.
///
/// A heuristic may be supplied for entry symmetry with priority-ordered
/// strategies; plain breadth-first ordering ignores it.
pub struct BreadthFirstSearch<S, H = ZeroHeuristic> {
    root: S,
    goal: S,
    heuristic: H,
    outcome: Option<GoalRecord<S>>,
    stats: SearchStats,
}

impl<S: SearchState> BreadthFirstSearch<S> {
    /// Construct a breadth-first search from `root` to `goal`.
    pub fn new(root: S, goal: S) -> Self {
        Self::with_heuristic(root, goal, ZeroHeuristic)
    }
}

impl<S: SearchState, H: Heuristic<S>> BreadthFirstSearch<S, H> {
    /// Construct a breadth-first search carrying `heuristic` estimates on
    /// its entries.
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

impl<S: SearchState, H: Heuristic<S>> SearchStrategy<S> for BreadthFirstSearch<S, H> {
    fn search(&mut self) {
        self.outcome = None;
        self.stats = SearchStats::default();

        let mut frontier: VecDeque<SearchEntry<S, ()>> = VecDeque::new();
        let mut predecessors: HashMap<S, Option<S>> = HashMap::new();

        let estimate = self.heuristic.estimate(&self.root);
        frontier.push_back(SearchEntry::root(self.root.clone(), estimate, ()));
        self.stats.generated = 1;
        self.stats.frontier_high_water = 1;

        while let Some(entry) = frontier.pop_front() {
            // A state can be enqueued from several parents before its first
            // dequeue finalizes it; later copies are stale.
            if predecessors.contains_key(&entry.state) {
                self.stats.duplicates_suppressed += 1;
                continue;
            }
            predecessors.insert(entry.state.clone(), entry.predecessor.clone());

            if entry.state == self.goal {
                let path = predecessor_path(&predecessors, &entry.state);
                self.outcome = Some(GoalRecord {
                    depth: entry.depth,
                    cost: entry.total_cost,
                    path,
                });
                self.stats.termination = Termination::GoalReached;
                return;
            }

            self.stats.expansions += 1;
            for successor in entry.state.successors() {
                if predecessors.contains_key(&successor) {
                    continue;
                }
                let edge_cost = entry.state.edge_cost(&successor);
                let estimate = self.heuristic.estimate(&successor);
                frontier.push_back(SearchEntry::successor(
                    &entry, successor, edge_cost, estimate, (),
                ));
                self.stats.generated += 1;
                let size = frontier.len() as u64;
                if size > self.stats.frontier_high_water {
                    self.stats.frontier_high_water = size;
                }
            }
        }

        self.stats.termination = Termination::FrontierExhausted;
    }

    fn outcome(&self) -> Option<&GoalRecord<S>> {
        self.outcome.as_ref()
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
