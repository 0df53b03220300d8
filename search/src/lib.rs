//! Meridian Search: generic state-space traversal over an implicit graph.
//!
//! A state space is defined by a root state, a goal state, and the
//! [`SearchState`] contract (successor enumeration plus edge costs). This
//! crate explores that space with interchangeable strategies sharing one
//! result contract:
//!
//! - [`BreadthFirstSearch`]: FIFO traversal, minimum-depth paths
//! - [`DepthFirstSearch`]: LIFO traversal with on-path cycle avoidance,
//!   optionally depth-limited via [`DepthBound`]
//! - [`IterativeDeepeningSearch`]: repeated depth-limited runs with
//!   increasing limits
//! - [`BestFirstSearch`]: priority traversal ordered by
//!   `total_cost + heuristic_estimate` (uniform-cost with the zero
//!   heuristic, A* with an admissible one)
//!
//! # Crate dependency graph
//!
//! ```text
//! meridian_search  ←  meridian_harness
//! (entries, frontier,  (timed runner, verbose
//!  strategies, stats)   report, example worlds)
//! ```
//!
//! The crate performs no I/O. Reporting, timing, and concrete state spaces
//! live in `meridian_harness`, which consumes only the public accessors of
//! [`SearchStrategy`].
//!
//! [`BreadthFirstSearch`]: bfs::BreadthFirstSearch
//! [`DepthFirstSearch`]: dfs::DepthFirstSearch
//! [`DepthBound`]: dfs::DepthBound
//! [`IterativeDeepeningSearch`]: deepening::IterativeDeepeningSearch
//! [`BestFirstSearch`]: best_first::BestFirstSearch
//! [`SearchState`]: contract::SearchState
//! [`SearchStrategy`]: contract::SearchStrategy

#![forbid(unsafe_code)]

pub mod best_first;
pub mod bfs;
pub mod contract;
pub mod deepening;
pub mod dfs;
pub mod entry;
pub mod frontier;
pub mod heuristic;
pub mod stats;
