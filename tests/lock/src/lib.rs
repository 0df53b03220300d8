//! Shared fixtures for the lock tests.

#![forbid(unsafe_code)]

use meridian_harness::worlds::city_map::CityMap;

/// The four-node diamond: two routes from `a` to `d`, one shallow and
/// cheap, one shallow and expensive.
///
/// ```text
/// a →(1) b →(1) d
/// a →(5) c →(1) d
/// ```
#[must_use]
pub fn diamond_map() -> CityMap {
    let mut map = CityMap::new();
    map.add_road("a", "b", 1.0);
    map.add_road("a", "c", 5.0);
    map.add_road("b", "d", 1.0);
    map.add_road("c", "d", 1.0);
    map
}

/// A straight chain `n0 → n1 → … → n<len>` of unit-cost roads.
#[must_use]
pub fn chain_map(len: usize) -> CityMap {
    let mut map = CityMap::new();
    for i in 0..len {
        map.add_road(&format!("n{i}"), &format!("n{}", i + 1), 1.0);
    }
    map
}

/// Sum of declared edge costs along `path`, asserting each consecutive
/// pair really is a declared edge.
#[must_use]
pub fn path_cost<S: meridian_search::contract::SearchState>(path: &[S]) -> f64 {
    path.windows(2)
        .map(|pair| {
            assert!(
                pair[0].successors().contains(&pair[1]),
                "path contains a pair with no declared edge"
            );
            pair[0].edge_cost(&pair[1])
        })
        .sum()
}
