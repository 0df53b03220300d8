//! A weighted directed road map between named cities.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use meridian_search::contract::SearchState;
use meridian_search::heuristic::Heuristic;

/// A small directed graph of named cities and weighted roads.
///
/// Cities are created on first mention; roads are directed, so a two-way
/// road is two `add_road` calls. The map owns all topology; states are
/// just borrowed views into it.
#[derive(Debug, Default)]
pub struct CityMap {
    names: Vec<String>,
    roads: Vec<Vec<(usize, f64)>>,
}

impl CityMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A compact demo map of Roman landmarks. The shallowest route from
    /// the gate to the colosseum is not the cheapest one, which keeps
    /// depth-ordered and cost-ordered strategies distinguishable.
    #[must_use]
    pub fn roman_roads() -> Self {
        let mut map = Self::new();
        map.add_road("porta", "macellum", 2.0);
        map.add_road("porta", "thermae", 5.0);
        map.add_road("porta", "insula", 1.0);
        map.add_road("macellum", "forum", 2.0);
        map.add_road("thermae", "forum", 1.0);
        map.add_road("forum", "colosseum", 3.0);
        map.add_road("insula", "colosseum", 9.0);
        map
    }

    /// Add a directed road of the given cost, creating either city on
    /// first mention.
    pub fn add_road(&mut self, from: &str, to: &str, cost: f64) {
        let from = self.intern(from);
        let to = self.intern(to);
        self.roads[from].push((to, cost));
    }

    /// The state for a named city, if the map knows it.
    #[must_use]
    pub fn city(&self, name: &str) -> Option<CityState<'_>> {
        self.names
            .iter()
            .position(|known| known == name)
            .map(|id| CityState { map: self, id })
    }

    /// A table-driven heuristic over this map's cities.
    ///
    /// Cities absent from the table estimate 0.0, which keeps the table
    /// admissible by default.
    #[must_use]
    pub fn heuristic(&self, table: &[(&str, f64)]) -> CityHeuristic {
        let estimates = table
            .iter()
            .filter_map(|&(name, estimate)| {
                self.names
                    .iter()
                    .position(|known| known == name)
                    .map(|id| (id, estimate))
            })
            .collect();
        CityHeuristic { estimates }
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(id) = self.names.iter().position(|known| known == name) {
            return id;
        }
        self.names.push(name.to_string());
        self.roads.push(Vec::new());
        self.names.len() - 1
    }
}

/// One city of a [`CityMap`], usable as a search state.
///
/// Equality and hashing cover the city id only; states are meaningful
/// within the single map that produced them.
#[derive(Debug, Clone, Copy)]
pub struct CityState<'a> {
    map: &'a CityMap,
    id: usize,
}

impl CityState<'_> {
    /// The city's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.map.names[self.id]
    }
}

impl PartialEq for CityState<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CityState<'_> {}

impl Hash for CityState<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for CityState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl SearchState for CityState<'_> {
    fn successors(&self) -> Vec<Self> {
        self.map.roads[self.id]
            .iter()
            .map(|&(id, _)| CityState { map: self.map, id })
            .collect()
    }

    fn edge_cost(&self, successor: &Self) -> f64 {
        // Absent edges are undefined by contract and never queried by the
        // traversal engines.
        self.map.roads[self.id]
            .iter()
            .find(|&&(id, _)| id == successor.id)
            .map_or(f64::INFINITY, |&(_, cost)| cost)
    }
}

/// Heuristic estimates looked up from a per-city table.
#[derive(Debug, Clone)]
pub struct CityHeuristic {
    estimates: HashMap<usize, f64>,
}

impl<'a> Heuristic<CityState<'a>> for CityHeuristic {
    fn estimate(&self, state: &CityState<'a>) -> f64 {
        self.estimates.get(&state.id).copied().unwrap_or(0.0)
    }
}
