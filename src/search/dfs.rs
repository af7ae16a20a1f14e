//! Depth-limited depth-first search.
//!
//! The frontier is a stack. A popped node is expanded only while its depth
//! is below the limit; deeper nodes are discarded unexpanded, so the search
//! can miss solutions that lie beyond the limit.
//!
//! Deduplication is eager: a configuration enters the visited set as soon as
//! its node is constructed, which keeps sibling-reachable duplicates out of
//! the stack entirely.

use std::time::Instant;

use crate::memory::{MemoryGovernor, MemoryProbe, ProcessMemoryProbe};
use crate::rules::Configuration;

use super::config::DEFAULT_DEPTH_LIMIT;
use super::node::{NodeId, SearchNode};
use super::stats::{SearchOutcome, SearchStats};
use super::tree::SearchTree;
use super::visited::VisitedSet;
use super::{already_solved, finish, Stop};

const NAME: &str = "dfs";

/// Depth-limited depth-first search bounded by a memory governor.
#[derive(Clone, Debug)]
pub struct DepthFirstSearch<P: MemoryProbe = ProcessMemoryProbe> {
    governor: MemoryGovernor<P>,
    depth_limit: u32,
}

impl DepthFirstSearch<ProcessMemoryProbe> {
    /// Create a search with the given depth limit and memory budget.
    #[must_use]
    pub fn new(depth_limit: u32, budget: u64) -> Self {
        Self::with_governor(MemoryGovernor::new(budget), depth_limit)
    }

    /// Create a search that never stops for memory.
    #[must_use]
    pub fn unlimited(depth_limit: u32) -> Self {
        Self::with_governor(MemoryGovernor::unlimited(), depth_limit)
    }
}

impl Default for DepthFirstSearch<ProcessMemoryProbe> {
    fn default() -> Self {
        Self::unlimited(DEFAULT_DEPTH_LIMIT)
    }
}

impl<P: MemoryProbe> DepthFirstSearch<P> {
    /// Create a search with a custom governor.
    pub fn with_governor(governor: MemoryGovernor<P>, depth_limit: u32) -> Self {
        Self {
            governor,
            depth_limit,
        }
    }

    /// The configured depth limit.
    #[must_use]
    pub fn depth_limit(&self) -> u32 {
        self.depth_limit
    }

    /// Get the governor.
    pub fn governor(&self) -> &MemoryGovernor<P> {
        &self.governor
    }

    /// Search for an action sequence of at most `depth_limit` actions.
    ///
    /// Returns the empty sequence when `initial` is already final, when the
    /// bounded space holds no solution, or when memory ran out.
    pub fn solve<C: Configuration>(&mut self, initial: &C) -> Vec<C::Action> {
        self.solve_with_stats(initial).actions
    }

    /// Like [`solve`](Self::solve), also returning run statistics.
    pub fn solve_with_stats<C: Configuration>(&mut self, initial: &C) -> SearchOutcome<C::Action> {
        let start = Instant::now();
        if initial.is_final() {
            return already_solved(NAME, start);
        }
        log::debug!("{NAME}: starting search, depth limit {}", self.depth_limit);

        let mut stats = SearchStats::new();
        let mut tree: SearchTree<C, C::Action> = SearchTree::new(initial.clone());
        let mut visited = VisitedSet::new();
        visited.insert(&tree, initial.fingerprint(), tree.root());
        let mut open: Vec<NodeId> = vec![tree.root()];

        let stop = self.expand_all(&mut tree, &mut visited, &mut open, &mut stats);

        stats.visited = visited.len();
        finish(NAME, &tree, stop, stats, start)
    }

    fn expand_all<C: Configuration>(
        &self,
        tree: &mut SearchTree<C, C::Action>,
        visited: &mut VisitedSet,
        open: &mut Vec<NodeId>,
        stats: &mut SearchStats,
    ) -> Stop {
        while let Some(current) = open.pop() {
            let depth = tree.get(current).depth;
            if depth >= self.depth_limit {
                stats.depth_cutoffs += 1;
                continue;
            }
            stats.nodes_expanded += 1;

            let actions = tree.configuration(current).legal_actions();
            log::trace!("{NAME}: expanding {current} at depth {depth}, {} actions", actions.len());

            for action in actions {
                if !self.governor.may_expand() {
                    log::warn!(
                        "{NAME}: memory budget of {} bytes reached, aborting",
                        self.governor.budget()
                    );
                    return Stop::MemoryLimit;
                }

                let next = tree.configuration(current).apply(&action);
                stats.observe_generated(depth + 1);

                if next.is_final() {
                    let id = tree.alloc(SearchNode::child(next, current, depth, action));
                    return Stop::Solved(id);
                }

                let fingerprint = next.fingerprint();
                if visited.contains(tree, fingerprint, &next) {
                    stats.duplicates_dropped += 1;
                    continue;
                }

                let id = tree.alloc(SearchNode::child(next, current, depth, action));
                visited.insert(tree, fingerprint, id);
                open.push(id);
            }
            stats.observe_frontier(open.len());
        }
        Stop::Exhausted
    }
}
