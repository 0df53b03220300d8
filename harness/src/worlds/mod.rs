//! Example state spaces for tests, demos, and benchmarks.
//!
//! These worlds are domain collaborators of the search core: each supplies
//! a concrete [`SearchState`](meridian_search::contract::SearchState)
//! implementation, and nothing here reaches into any traversal internals.

pub mod city_map;
pub mod counter;
