//! Domain and strategy contracts.

use std::hash::Hash;

use crate::stats::SearchStats;

/// Contract any domain-specific state must satisfy.
///
/// A state is an opaque, preferably immutable value that can enumerate its
/// direct successors and price the edge to each of them. States are used as
/// map and set keys during traversal, hence the `Eq + Hash` bound; cheap
/// `Clone` (an id, an index, a small copy type) is expected.
///
/// # Contract
///
/// - `successors` must be deterministic: the same state returns the same
///   successors in the same order within one run.
/// - `edge_cost` is defined only for pairs returned by `successors`; the
///   traversal engines never query it for any other pair.
pub trait SearchState: Clone + Eq + Hash {
    /// The direct successors of this state, in enumeration order.
    fn successors(&self) -> Vec<Self>;

    /// The cost of moving directly from this state to `successor`.
    ///
    /// Behaviour is undefined if there is no edge to move along.
    fn edge_cost(&self, successor: &Self) -> f64;
}

/// The recorded result of a successful search.
///
/// Built once, at the moment the goal is reached; the bookkeeping that
/// produced it (frontier, predecessor map, path stack) is discarded with the
/// running call.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalRecord<S> {
    /// Depth of the goal in the search tree (root = 0).
    pub depth: u32,
    /// Accumulated edge cost of the path taken.
    pub cost: f64,
    /// The path taken, from the root to the goal inclusive.
    pub path: Vec<S>,
}

/// Shared contract every traversal strategy implements.
///
/// A strategy is constructed with its root, goal, and (where meaningful) a
/// heuristic, then driven by [`search`](SearchStrategy::search). Results are
/// read through the accessors afterwards. Accessors return `None` until a
/// search has succeeded; a fresh `search` call clears any prior result
/// before exploring, so stale data never leaks across runs.
pub trait SearchStrategy<S: SearchState> {
    /// Run the search to completion: either the goal is found or the
    /// frontier is exhausted.
    ///
    /// May not terminate if the state space is infinite and the goal is
    /// unreachable. Calling `search` again fully resets internal state and
    /// reproduces the same result (no bookkeeping survives between runs).
    fn search(&mut self);

    /// The result of the last `search` call, if it reached the goal.
    fn outcome(&self) -> Option<&GoalRecord<S>>;

    /// Counters describing the last `search` call.
    fn stats(&self) -> &SearchStats;

    /// Whether the last `search` call ended at the goal.
    fn goal_found(&self) -> bool {
        self.outcome().is_some()
    }

    /// Depth of the goal, if found.
    fn goal_depth(&self) -> Option<u32> {
        self.outcome().map(|record| record.depth)
    }

    /// Accumulated cost of the path to the goal, if found.
    fn goal_cost(&self) -> Option<f64> {
        self.outcome().map(|record| record.cost)
    }

    /// The path from root to goal inclusive, if found.
    fn goal_path(&self) -> Option<&[S]> {
        self.outcome().map(|record| record.path.as_slice())
    }
}
