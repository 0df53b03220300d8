//! Shared helpers for meridian benchmark suites.

#![forbid(unsafe_code)]

use meridian_harness::worlds::city_map::CityMap;

/// A long two-lane road: a unit-cost chain `n0 → … → n<len>` plus a
/// parallel express road `n0 → n<len>` that costs slightly more than the
/// whole chain. Keeps priority frontiers honest: the express road is
/// discovered first and must be beaten by the accumulated chain.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn two_lane_map(len: usize) -> CityMap {
    let mut map = CityMap::new();
    let last = format!("n{len}");
    map.add_road("n0", &last, len as f64 + 0.5);
    for i in 0..len {
        map.add_road(&format!("n{i}"), &format!("n{}", i + 1), 1.0);
    }
    map
}
