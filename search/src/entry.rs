//! Per-node search bookkeeping: the frontier entry and its ordering key.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// An immutable record of one node's search-time metadata.
///
/// Entries are created when a node is discovered (or re-queued, for
/// strategies that use re-queue markers), never mutated, and discarded once
/// popped and processed. Information relevant to the final path survives via
/// the predecessor map or path stack, not the entry itself.
///
/// `M` is the strategy-specific payload: `()` where no extra bookkeeping is
/// needed, a phase marker for the depth-first family. Each strategy's entry
/// carries exactly the metadata it needs.
#[derive(Debug, Clone)]
pub struct SearchEntry<S, M> {
    /// The state itself.
    pub state: S,
    /// The state's predecessor in the search tree; `None` only for the root.
    pub predecessor: Option<S>,
    /// Depth in the search tree (root = 0).
    pub depth: u32,
    /// Accumulated edge cost from the root (root = 0.0).
    pub total_cost: f64,
    /// Heuristic estimate of the remaining cost; 0.0 for strategies that
    /// ignore it.
    pub heuristic_estimate: f64,
    /// Strategy-specific payload.
    pub payload: M,
}

impl<S: Clone, M> SearchEntry<S, M> {
    /// The root entry: no predecessor, depth 0, cost 0.
    #[must_use]
    pub fn root(state: S, heuristic_estimate: f64, payload: M) -> Self {
        Self {
            state,
            predecessor: None,
            depth: 0,
            total_cost: 0.0,
            heuristic_estimate,
            payload,
        }
    }

    /// An entry for `state`, one edge beyond `parent`.
    ///
    /// Maintains the child invariants: depth is the parent's plus one, total
    /// cost is the parent's plus `edge_cost`.
    #[must_use]
    pub fn successor(
        parent: &Self,
        state: S,
        edge_cost: f64,
        heuristic_estimate: f64,
        payload: M,
    ) -> Self {
        Self {
            predecessor: Some(parent.state.clone()),
            depth: parent.depth + 1,
            total_cost: parent.total_cost + edge_cost,
            state,
            heuristic_estimate,
            payload,
        }
    }

    /// The sort key for priority-ordered strategies:
    /// `total_cost + heuristic_estimate`.
    #[must_use]
    pub fn f_cost(&self) -> f64 {
        self.total_cost + self.heuristic_estimate
    }
}

/// The frontier ordering key: `(f_cost, depth, creation_order)`.
///
/// Lower `f_cost` first, then shallower depth, then older creation order.
/// `f_cost` compares via [`f64::total_cmp`], so the order is total and an
/// entry mix containing pathological values still sorts deterministically.
/// The tie-break is not semantically significant, but makes extraction
/// order reproducible within one run.
#[derive(Debug, Clone, Copy)]
pub struct PriorityKey {
    pub f_cost: f64,
    pub depth: u32,
    pub creation_order: u64,
}

impl PartialEq for PriorityKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityKey {}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .total_cmp(&other.f_cost)
            .then(self.depth.cmp(&other.depth))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

/// Walk a predecessor map backwards from `goal` to the root (the one state
/// whose recorded predecessor is `None`), returning the path in
/// root-to-goal order.
#[must_use]
pub fn predecessor_path<S>(predecessors: &HashMap<S, Option<S>>, goal: &S) -> Vec<S>
where
    S: Clone + Eq + Hash,
{
    let mut path = Vec::new();
    let mut cursor = Some(goal.clone());
    while let Some(state) = cursor {
        cursor = predecessors.get(&state).cloned().flatten();
        path.push(state);
    }
    path.reverse();
    path
}
