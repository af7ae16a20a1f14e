//! Breadth-first search.
//!
//! The frontier is a FIFO queue, so every node at depth `d` is expanded
//! before any node at depth `d + 1`, and successors of one node are queued
//! contiguously in enumeration order. The first final configuration
//! generated is therefore reached by a shortest action sequence.
//!
//! Deduplication is lazy: a configuration enters the visited set when it is
//! dequeued for expansion. Successors already visited are not queued, and a
//! queued duplicate is dropped when it reaches the front.

use std::collections::VecDeque;
use std::time::Instant;

use crate::memory::{MemoryGovernor, MemoryProbe, ProcessMemoryProbe};
use crate::rules::Configuration;

use super::node::{NodeId, SearchNode};
use super::stats::{SearchOutcome, SearchStats};
use super::tree::SearchTree;
use super::visited::VisitedSet;
use super::{already_solved, finish, Stop};

const NAME: &str = "bfs";

/// Breadth-first search bounded by a memory governor.
#[derive(Clone, Debug)]
pub struct BreadthFirstSearch<P: MemoryProbe = ProcessMemoryProbe> {
    governor: MemoryGovernor<P>,
}

impl BreadthFirstSearch<ProcessMemoryProbe> {
    /// Create a search bounded by `budget` bytes of resident memory.
    #[must_use]
    pub fn new(budget: u64) -> Self {
        Self::with_governor(MemoryGovernor::new(budget))
    }

    /// Create a search that never stops for memory.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::with_governor(MemoryGovernor::unlimited())
    }
}

impl<P: MemoryProbe> BreadthFirstSearch<P> {
    /// Create a search with a custom governor.
    pub fn with_governor(governor: MemoryGovernor<P>) -> Self {
        Self { governor }
    }

    /// Get the governor.
    pub fn governor(&self) -> &MemoryGovernor<P> {
        &self.governor
    }

    /// Search for a shortest action sequence reaching a final configuration.
    ///
    /// Returns the empty sequence when `initial` is already final or when no
    /// solution was found within the memory budget.
    pub fn solve<C: Configuration>(&mut self, initial: &C) -> Vec<C::Action> {
        self.solve_with_stats(initial).actions
    }

    /// Like [`solve`](Self::solve), also returning run statistics.
    pub fn solve_with_stats<C: Configuration>(&mut self, initial: &C) -> SearchOutcome<C::Action> {
        let start = Instant::now();
        if initial.is_final() {
            return already_solved(NAME, start);
        }
        log::debug!("{NAME}: starting search");

        let mut stats = SearchStats::new();
        let mut tree: SearchTree<C, C::Action> = SearchTree::new(initial.clone());
        let mut visited = VisitedSet::new();
        let mut open: VecDeque<(NodeId, u64)> = VecDeque::new();
        open.push_back((tree.root(), initial.fingerprint()));

        let stop = self.expand_all(&mut tree, &mut visited, &mut open, &mut stats);

        stats.visited = visited.len();
        finish(NAME, &tree, stop, stats, start)
    }

    fn expand_all<C: Configuration>(
        &self,
        tree: &mut SearchTree<C, C::Action>,
        visited: &mut VisitedSet,
        open: &mut VecDeque<(NodeId, u64)>,
        stats: &mut SearchStats,
    ) -> Stop {
        while let Some((current, fingerprint)) = open.pop_front() {
            if !visited.insert(tree, fingerprint, current) {
                stats.duplicates_dropped += 1;
                continue;
            }
            stats.nodes_expanded += 1;

            let depth = tree.get(current).depth;
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

                let next_fingerprint = next.fingerprint();
                if visited.contains(tree, next_fingerprint, &next) {
                    stats.duplicates_dropped += 1;
                    continue;
                }

                let id = tree.alloc(SearchNode::child(next, current, depth, action));
                open.push_back((id, next_fingerprint));
            }
            stats.observe_frontier(open.len());
        }
        Stop::Exhausted
    }
}
