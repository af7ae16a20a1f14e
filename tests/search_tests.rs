//! Search strategy tests.
//!
//! These tests run the three strategies against small synthetic spaces
//! and scrambled FreeCell deals:
//! - Solutions replay to a final configuration
//! - BFS returns shortest solutions, DFS respects its depth limit
//! - A* pops priorities in order under a consistent heuristic
//! - Deduplication never expands a configuration twice
//! - Memory vetoes and already-solved inputs yield the empty result

mod common;

use common::{all_distinct, graph_distance, Colliding, Graph, Recording};
use freecell_search::games::freecell::DealBuilder;
use freecell_search::memory::{FixedProbe, MemoryGovernor};
use freecell_search::{
    replay, AStarSearch, BreadthFirstSearch, Configuration, DepthFirstSearch, HeuristicKind,
    SearchConfig, Solver, StrategyKind, Termination, ZeroHeuristic,
};

// =============================================================================
// Breadth-first
// =============================================================================

#[test]
fn test_bfs_finds_shortest_path() {
    let mut bfs = BreadthFirstSearch::unlimited();
    let outcome = bfs.solve_with_stats(&Graph(0));

    assert_eq!(outcome.actions, vec![1, 4, 6]);
    assert_eq!(outcome.stats.termination, Termination::Solved);
    assert!(replay(&Graph(0), &outcome.actions).is_final());
}

#[test]
fn test_bfs_survives_fingerprint_collisions() {
    let mut bfs = BreadthFirstSearch::unlimited();
    let actions = bfs.solve(&Colliding(0));
    assert_eq!(actions, vec![1, 4, 6]);
}

#[test]
fn test_bfs_unreachable_goal_exhausts() {
    let mut bfs = BreadthFirstSearch::unlimited();
    // Node 8 has no successors
    let outcome = bfs.solve_with_stats(&Graph(8));

    assert!(outcome.actions.is_empty());
    assert_eq!(outcome.stats.termination, Termination::Exhausted);
    assert_eq!(outcome.stats.nodes_expanded, 1);
}

// =============================================================================
// Depth-first
// =============================================================================

#[test]
fn test_dfs_finds_path_within_limit() {
    let mut dfs = DepthFirstSearch::unlimited(3);
    let outcome = dfs.solve_with_stats(&Graph(0));

    assert_eq!(outcome.actions.len(), 3);
    assert!(replay(&Graph(0), &outcome.actions).is_final());
    assert!(outcome.stats.max_depth <= 3);
}

#[test]
fn test_dfs_limit_too_shallow_fails() {
    let mut dfs = DepthFirstSearch::unlimited(2);
    let outcome = dfs.solve_with_stats(&Graph(0));

    assert!(outcome.actions.is_empty());
    assert_eq!(outcome.stats.termination, Termination::Exhausted);
    assert!(outcome.stats.max_depth <= 2);
    assert!(outcome.stats.depth_cutoffs > 0);
}

#[test]
fn test_dfs_zero_limit_fails_on_non_final_input() {
    let mut dfs = DepthFirstSearch::unlimited(0);
    let outcome = dfs.solve_with_stats(&Graph(0));

    assert!(outcome.actions.is_empty());
    assert_eq!(outcome.stats.nodes_expanded, 0);
    assert_eq!(outcome.stats.nodes_generated, 0);
}

// =============================================================================
// Best-first
// =============================================================================

#[test]
fn test_astar_follows_consistent_heuristic() {
    let mut astar = AStarSearch::unlimited(graph_distance).with_trace();
    let actions = astar.solve(&Graph(0));

    assert_eq!(actions, vec![1, 4, 6]);
    assert_eq!(astar.trace().unwrap(), &[3.0, 3.0, 3.0]);
}

#[test]
fn test_astar_popped_priorities_non_decreasing() {
    let mut astar = AStarSearch::unlimited(ZeroHeuristic).with_trace();
    let actions = astar.solve(&Graph(0));
    assert_eq!(actions.len(), 3);

    let trace = astar.trace().unwrap();
    assert!(trace.windows(2).all(|w| w[0] <= w[1]), "trace {trace:?}");

    let mut astar = AStarSearch::unlimited(graph_distance).with_trace();
    astar.solve(&Graph(2));
    let trace = astar.trace().unwrap();
    assert!(trace.windows(2).all(|w| w[0] <= w[1]), "trace {trace:?}");
}

#[test]
fn test_astar_on_freecell_with_each_heuristic() {
    let initial = DealBuilder::new().scrambled(11, 4);
    for kind in HeuristicKind::ALL {
        let mut astar = AStarSearch::unlimited(kind);
        let actions = astar.solve(&initial);
        assert!(!actions.is_empty(), "{kind:?} found nothing");
        assert!(replay(&initial, &actions).is_final(), "{kind:?} replay not final");
    }
}

// =============================================================================
// Shared behaviour
// =============================================================================

#[test]
fn test_already_final_returns_empty() {
    let solved = DealBuilder::new().scrambled(1, 0);

    let outcome = BreadthFirstSearch::unlimited().solve_with_stats(&solved);
    assert!(outcome.actions.is_empty());
    assert_eq!(outcome.stats.termination, Termination::AlreadySolved);

    let outcome = DepthFirstSearch::unlimited(10).solve_with_stats(&solved);
    assert!(outcome.actions.is_empty());
    assert_eq!(outcome.stats.termination, Termination::AlreadySolved);

    let outcome = AStarSearch::unlimited(HeuristicKind::Blended).solve_with_stats(&solved);
    assert!(outcome.actions.is_empty());
    assert_eq!(outcome.stats.termination, Termination::AlreadySolved);

    assert!(BreadthFirstSearch::unlimited().solve(&Graph(6)).is_empty());
}

#[test]
fn test_tiny_budget_aborts_every_strategy() {
    let initial = DealBuilder::new().scrambled(2, 4);

    let outcome = BreadthFirstSearch::new(1).solve_with_stats(&initial);
    assert!(outcome.actions.is_empty());
    assert_eq!(outcome.stats.termination, Termination::MemoryLimit);

    let outcome = DepthFirstSearch::new(50, 1).solve_with_stats(&initial);
    assert!(outcome.actions.is_empty());
    assert_eq!(outcome.stats.termination, Termination::MemoryLimit);

    let outcome = AStarSearch::new(HeuristicKind::Blended, 1).solve_with_stats(&initial);
    assert!(outcome.actions.is_empty());
    assert_eq!(outcome.stats.termination, Termination::MemoryLimit);
}

#[test]
fn test_governor_veto_is_not_an_error() {
    let governor = MemoryGovernor::with_probe(FixedProbe(900), 1_000).with_reserved_margin(200);
    let mut bfs = BreadthFirstSearch::with_governor(governor);
    assert!(bfs.solve(&Graph(0)).is_empty());
}

#[test]
fn test_no_configuration_expanded_twice() {
    let initial = Recording::new(Graph(0));
    BreadthFirstSearch::unlimited().solve(&initial);
    let expanded = initial.expanded();
    assert!(!expanded.is_empty());
    assert!(all_distinct(&expanded), "bfs expanded {expanded:?}");

    let initial = Recording::new(Graph(0));
    DepthFirstSearch::unlimited(10).solve(&initial);
    let expanded = initial.expanded();
    assert!(all_distinct(&expanded), "dfs expanded {expanded:?}");

    let initial = Recording::new(Graph(0));
    AStarSearch::unlimited(|r: &Recording<Graph>| graph_distance(&r.inner)).solve(&initial);
    let expanded = initial.expanded();
    assert!(all_distinct(&expanded), "astar expanded {expanded:?}");
}

#[test]
fn test_no_freecell_configuration_expanded_twice() {
    let initial = Recording::new(DealBuilder::new().scrambled(8, 3));
    let actions = BreadthFirstSearch::unlimited().solve(&initial);
    assert!(replay(&initial, &actions).is_final());
    assert!(all_distinct(&initial.expanded()));
}

#[test]
fn test_every_strategy_replays_scrambled_deals() {
    for seed in 0..4 {
        let initial = DealBuilder::new().scrambled(seed, 3);

        let bfs = BreadthFirstSearch::unlimited().solve(&initial);
        assert!(bfs.len() <= 3, "seed {seed}: bfs took {} moves", bfs.len());
        assert!(replay(&initial, &bfs).is_final(), "seed {seed}: bfs");

        // Two lifts: sending the last one home is a depth-1 node whose children include the final one
        let shallow = DealBuilder::new().scrambled(seed, 2);
        let dfs = DepthFirstSearch::unlimited(12).solve(&shallow);
        assert!(!dfs.is_empty(), "seed {seed}: dfs found nothing");
        assert!(replay(&shallow, &dfs).is_final(), "seed {seed}: dfs");

        let astar = AStarSearch::unlimited(HeuristicKind::Blended).solve(&initial);
        assert!(replay(&initial, &astar).is_final(), "seed {seed}: astar");
    }
}

#[test]
fn test_solver_from_config() {
    let initial = DealBuilder::new().scrambled(5, 2);
    let config = SearchConfig::default().with_depth_limit(12);

    for kind in StrategyKind::ALL {
        let mut solver = Solver::from_config(kind, &config).unwrap();
        let outcome = solver.solve_with_stats(&initial);
        assert!(outcome.is_solved(), "{kind} did not solve");
        assert!(replay(&initial, &outcome.actions).is_final(), "{kind}");
    }
}
