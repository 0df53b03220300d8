//! Depth guarantees across strategies: BFS minimality, depth-limit
//! enforcement, agreement between the depth-first family members, and
//! iterative-deepening minimality.

use lock_tests::{chain_map, path_cost};
use meridian_harness::worlds::counter::CounterState;
use meridian_search::bfs::BreadthFirstSearch;
use meridian_search::contract::SearchStrategy;
use meridian_search::deepening::IterativeDeepeningSearch;
use meridian_search::dfs::DepthFirstSearch;

// ---------------------------------------------------------------------------
// BFS returns true shortest-path depth
// ---------------------------------------------------------------------------

#[test]
fn bfs_depth_is_minimal_on_the_counter_space() {
    // Shortest routes 1 → n are easy to enumerate by hand for small n.
    let expected = [
        (2, 1),  // 1 → 2
        (4, 2),  // 1 → 2 → 4
        (10, 4), // 1 → 2 → 4 → 5 → 10
        (16, 4), // 1 → 2 → 4 → 8 → 16
    ];
    for (goal, depth) in expected {
        let mut search = BreadthFirstSearch::new(CounterState(1), CounterState(goal));
        search.search();
        assert_eq!(
            search.goal_depth(),
            Some(depth),
            "wrong shortest depth for goal {goal}"
        );
    }
}

#[test]
fn bfs_cost_equals_depth_under_uniform_edge_costs() {
    let mut search = BreadthFirstSearch::new(CounterState(1), CounterState(37));
    search.search();
    let depth = search.goal_depth().unwrap();
    assert_eq!(search.goal_cost(), Some(f64::from(depth)));
}

#[test]
fn bfs_path_round_trip_on_the_counter_space() {
    let mut search = BreadthFirstSearch::new(CounterState(1), CounterState(100));
    search.search();
    let record = search.outcome().unwrap();

    assert_eq!(record.path.first(), Some(&CounterState(1)));
    assert_eq!(record.path.last(), Some(&CounterState(100)));
    assert_eq!(path_cost(&record.path), record.cost);
}

// ---------------------------------------------------------------------------
// Depth-limited: never deeper than the limit, agrees with DFS inside it
// ---------------------------------------------------------------------------

#[test]
fn depth_limited_never_exceeds_its_limit() {
    for limit in 0..8 {
        let mut search =
            DepthFirstSearch::depth_limited(CounterState(1), CounterState(24), limit);
        search.search();
        if let Some(depth) = search.goal_depth() {
            assert!(depth <= limit, "limit {limit} produced depth {depth}");
        }
    }
}

#[test]
fn depth_limited_matches_dfs_when_the_dfs_answer_fits() {
    let map = chain_map(5);
    let root = map.city("n0").unwrap();
    let goal = map.city("n5").unwrap();

    let mut unbounded = DepthFirstSearch::new(root, goal);
    unbounded.search();
    let reference = unbounded.outcome().cloned().unwrap();

    let mut limited = DepthFirstSearch::depth_limited(root, goal, reference.depth);
    limited.search();
    assert_eq!(limited.outcome().cloned().unwrap(), reference);
}

#[test]
fn depth_limited_fails_when_all_routes_are_deeper() {
    let map = chain_map(6);
    let mut search =
        DepthFirstSearch::depth_limited(map.city("n0").unwrap(), map.city("n6").unwrap(), 5);
    search.search();
    assert!(!search.goal_found());
}

// ---------------------------------------------------------------------------
// Iterative deepening: minimal depth by construction
// ---------------------------------------------------------------------------

#[test]
fn iterative_deepening_depth_matches_bfs_depth() {
    for goal in [4u64, 10, 24, 37] {
        let mut wide = BreadthFirstSearch::new(CounterState(1), CounterState(goal));
        wide.search();

        let mut deep = IterativeDeepeningSearch::new(CounterState(1), CounterState(goal));
        deep.search();

        assert_eq!(
            deep.goal_depth(),
            wide.goal_depth(),
            "iterative deepening found a non-minimal depth for goal {goal}"
        );
    }
}

#[test]
fn iterative_deepening_runs_one_round_per_limit() {
    let mut search = IterativeDeepeningSearch::new(CounterState(1), CounterState(4));
    search.search();
    let depth = search.goal_depth().unwrap();
    assert_eq!(search.stats().rounds, u64::from(depth) + 1);
}
