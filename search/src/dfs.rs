//! Depth-first traversal engine, optionally depth-limited.

use std::collections::HashSet;

use crate::contract::{GoalRecord, SearchState, SearchStrategy};
use crate::entry::SearchEntry;
use crate::stats::{SearchStats, Termination};

/// Entry phase marker for the depth-first family.
///
/// Each expansion re-pushes a `Backtrack` entry for the current state under
/// its successors, so that popping it later signals the state is leaving
/// the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsPhase {
    /// A freshly discovered state awaiting expansion.
    Discover,
    /// The re-queued marker: popping it pops the path stack.
    Backtrack,
}

/// Enqueue policy for the depth-first engine.
///
/// `Limited(d)` silently drops any candidate entry deeper than `d`, turning
/// the engine into a depth-limited search; such a run reporting failure says
/// nothing about the goal existing at a greater depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthBound {
    /// No depth cutoff.
    Unbounded,
    /// Drop entries deeper than the limit.
    Limited(u32),
}

impl DepthBound {
    /// Whether an entry at `depth` may be enqueued under this bound.
    #[must_use]
    pub fn admits(self, depth: u32) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Limited(limit) => depth <= limit,
        }
    }
}

/// LIFO-ordered traversal tracking the current root-to-frontier path.
///
/// Cycle avoidance is local to the current path: a state already on the
/// path is never re-entered, but one reached again via a different path is
/// re-explored. The reported cost is the cost of the path actually taken,
/// with no optimality claim.
///
/// The depth-limited variant is the same engine with a
/// [`DepthBound::Limited`] policy at the single enqueue point.
pub struct DepthFirstSearch<S> {
    root: S,
    goal: S,
    bound: DepthBound,
    outcome: Option<GoalRecord<S>>,
    stats: SearchStats,
}

impl<S: SearchState> DepthFirstSearch<S> {
    /// Construct an unbounded depth-first search from `root` to `goal`.
    pub fn new(root: S, goal: S) -> Self {
        Self::bounded(root, goal, DepthBound::Unbounded)
    }

    /// Construct a depth-limited search: frontier candidates beyond
    /// `depth_limit` are dropped rather than explored.
    pub fn depth_limited(root: S, goal: S, depth_limit: u32) -> Self {
        Self::bounded(root, goal, DepthBound::Limited(depth_limit))
    }

    /// Construct a depth-first search with an explicit enqueue policy.
    pub fn bounded(root: S, goal: S, bound: DepthBound) -> Self {
        Self {
            root,
            goal,
            bound,
            outcome: None,
            stats: SearchStats::default(),
        }
    }

    /// The enqueue policy this engine runs under.
    #[must_use]
    pub fn depth_bound(&self) -> DepthBound {
        self.bound
    }

    /// Move the recorded result out of the engine.
    pub(crate) fn take_outcome(&mut self) -> Option<GoalRecord<S>> {
        self.outcome.take()
    }

    fn push_bounded(
        &mut self,
        stack: &mut Vec<SearchEntry<S, DfsPhase>>,
        entry: SearchEntry<S, DfsPhase>,
    ) {
        if !self.bound.admits(entry.depth) {
            return;
        }
        if entry.payload == DfsPhase::Discover {
            self.stats.generated += 1;
        }
        stack.push(entry);
        let size = stack.len() as u64;
        if size > self.stats.frontier_high_water {
            self.stats.frontier_high_water = size;
        }
    }
}

impl<S: SearchState> SearchStrategy<S> for DepthFirstSearch<S> {
    fn search(&mut self) {
        self.outcome = None;
        self.stats = SearchStats::default();

        let mut stack: Vec<SearchEntry<S, DfsPhase>> = Vec::new();
        let mut path_stack: Vec<S> = Vec::new();
        let mut path_set: HashSet<S> = HashSet::new();

        self.push_bounded(
            &mut stack,
            SearchEntry::root(self.root.clone(), 0.0, DfsPhase::Discover),
        );

        while let Some(entry) = stack.pop() {
            if entry.payload == DfsPhase::Backtrack {
                // The state under this marker has been fully explored and
                // leaves the current path.
                if let Some(state) = path_stack.pop() {
                    path_set.remove(&state);
                }
                continue;
            }

            if entry.state == self.goal {
                path_stack.push(entry.state.clone());
                self.outcome = Some(GoalRecord {
                    depth: entry.depth,
                    cost: entry.total_cost,
                    path: path_stack,
                });
                self.stats.termination = Termination::GoalReached;
                return;
            }

            // Re-queue the state under its successors so its pop signals a
            // backtrack, then extend the current path.
            self.push_bounded(
                &mut stack,
                SearchEntry {
                    state: entry.state.clone(),
                    predecessor: entry.predecessor.clone(),
                    depth: entry.depth,
                    total_cost: entry.total_cost,
                    heuristic_estimate: 0.0,
                    payload: DfsPhase::Backtrack,
                },
            );
            path_stack.push(entry.state.clone());
            path_set.insert(entry.state.clone());

            self.stats.expansions += 1;
            for successor in entry.state.successors() {
                if path_set.contains(&successor) {
                    self.stats.duplicates_suppressed += 1;
                    continue;
                }
                let edge_cost = entry.state.edge_cost(&successor);
                let child =
                    SearchEntry::successor(&entry, successor, edge_cost, 0.0, DfsPhase::Discover);
                self.push_bounded(&mut stack, child);
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
