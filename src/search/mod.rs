//! State-space search over solitaire configurations.
//!
//! ## Overview
//!
//! Three interchangeable strategies share one node model and one
//! expansion discipline:
//!
//! - **Breadth-first** (`BreadthFirstSearch`): FIFO frontier, shortest
//!   solutions in move count
//! - **Depth-limited depth-first** (`DepthFirstSearch`): LIFO frontier,
//!   nodes at the depth limit are discarded
//! - **Best-first / A\*** (`AStarSearch`): priority frontier ordered by
//!   `depth + heuristic`
//!
//! Every strategy:
//! - allocates nodes in a per-run `SearchTree` arena
//! - deduplicates through a content-keyed `VisitedSet`
//! - asks the `MemoryGovernor` before generating each successor
//! - stops as soon as a final successor is generated and rebuilds the
//!   action sequence with `reconstruct_path`
//!
//! The empty sequence means both "already solved" and "no solution under
//! the current bounds". Use `solve_with_stats` to see which one happened.
//!
//! ## Usage
//!
//! ```rust
//! use freecell_search::games::freecell::DealBuilder;
//! use freecell_search::rules::{replay, Configuration};
//! use freecell_search::search::BreadthFirstSearch;
//!
//! let initial = DealBuilder::new().scrambled(7, 3);
//! let mut bfs = BreadthFirstSearch::unlimited();
//! let actions = bfs.solve(&initial);
//!
//! assert!(replay(&initial, &actions).is_final());
//! ```

pub mod astar;
pub mod bfs;
pub mod config;
pub mod dfs;
pub mod fingerprint;
pub mod node;
pub mod path;
pub mod stats;
pub mod strategy;
pub mod tree;
pub mod visited;

// Re-export main types
pub use astar::AStarSearch;
pub use bfs::BreadthFirstSearch;
pub use config::SearchConfig;
pub use dfs::DepthFirstSearch;
pub use fingerprint::{fx_fingerprint, Fingerprint};
pub use node::{NodeId, SearchNode};
pub use path::reconstruct_path;
pub use stats::{SearchOutcome, SearchStats, Termination};
pub use strategy::{Solver, StrategyKind};
pub use tree::SearchTree;
pub use visited::VisitedSet;

use std::time::Instant;

/// How an expansion loop ended, before path reconstruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Stop {
    Solved(NodeId),
    Exhausted,
    MemoryLimit,
}

/// Turn a finished loop into an outcome, rebuilding the path when solved.
pub(crate) fn finish<C, A: Clone>(
    strategy: &str,
    tree: &SearchTree<C, A>,
    stop: Stop,
    mut stats: SearchStats,
    start: Instant,
) -> SearchOutcome<A> {
    stats.time_us = start.elapsed().as_micros() as u64;
    let actions = match stop {
        Stop::Solved(terminal) => {
            stats.termination = Termination::Solved;
            reconstruct_path(tree, terminal)
        }
        Stop::Exhausted => {
            stats.termination = Termination::Exhausted;
            Vec::new()
        }
        Stop::MemoryLimit => {
            stats.termination = Termination::MemoryLimit;
            Vec::new()
        }
    };
    log::debug!(
        "{strategy}: {:?} after {} expansions, {} nodes generated, {} actions",
        stats.termination,
        stats.nodes_expanded,
        stats.nodes_generated,
        actions.len()
    );
    SearchOutcome { actions, stats }
}

/// Outcome for an initial configuration that is already final.
pub(crate) fn already_solved<A>(strategy: &str, start: Instant) -> SearchOutcome<A> {
    log::debug!("{strategy}: initial configuration is already final");
    let stats = SearchStats {
        termination: Termination::AlreadySolved,
        time_us: start.elapsed().as_micros() as u64,
        ..SearchStats::default()
    };
    SearchOutcome {
        actions: Vec::new(),
        stats,
    }
}
