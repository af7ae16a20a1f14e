//! Heuristic best-first (A\*-style) search.
//!
//! The frontier is a binary heap ordered by ascending
//! `priority = depth + heuristic(configuration)`. Deduplication is lazy, as
//! in breadth-first search: a configuration enters the visited set when it is
//! popped for expansion.
//!
//! The heuristic need not be admissible, so in general this is a greedy
//! weighted best-first search rather than an optimal A\*.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use crate::heuristics::Heuristic;
use crate::memory::{MemoryGovernor, MemoryProbe, ProcessMemoryProbe};
use crate::rules::Configuration;

use super::node::{NodeId, SearchNode};
use super::stats::{SearchOutcome, SearchStats};
use super::tree::SearchTree;
use super::visited::VisitedSet;
use super::{already_solved, finish, Stop};

const NAME: &str = "astar";

/// A frontier entry: node plus its ordering key.
///
/// `BinaryHeap` is a max-heap, so `Ord` is reversed to pop the lowest
/// priority first. Equal priorities pop in insertion order.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    priority: f64,
    order: u64,
    node: NodeId,
    fingerprint: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then(other.order.cmp(&self.order))
    }
}

/// Best-first search guided by a heuristic and bounded by a memory governor.
#[derive(Clone, Debug)]
pub struct AStarSearch<H, P: MemoryProbe = ProcessMemoryProbe> {
    governor: MemoryGovernor<P>,
    heuristic: H,
    trace: Option<Vec<f64>>,
}

impl<H> AStarSearch<H, ProcessMemoryProbe> {
    /// Create a search with the given heuristic and memory budget.
    pub fn new(heuristic: H, budget: u64) -> Self {
        Self::with_governor(MemoryGovernor::new(budget), heuristic)
    }

    /// Create a search that never stops for memory.
    pub fn unlimited(heuristic: H) -> Self {
        Self::with_governor(MemoryGovernor::unlimited(), heuristic)
    }
}

impl<H, P: MemoryProbe> AStarSearch<H, P> {
    /// Create a search with a custom governor.
    pub fn with_governor(governor: MemoryGovernor<P>, heuristic: H) -> Self {
        Self {
            governor,
            heuristic,
            trace: None,
        }
    }

    /// Record the priority of every expanded node, in pop order.
    #[must_use]
    pub fn with_trace(mut self) -> Self {
        self.trace = Some(Vec::new());
        self
    }

    /// Priorities popped for expansion during the last run, if tracing.
    #[must_use]
    pub fn trace(&self) -> Option<&[f64]> {
        self.trace.as_deref()
    }

    /// Get the heuristic.
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Get the governor.
    pub fn governor(&self) -> &MemoryGovernor<P> {
        &self.governor
    }

    /// Search for an action sequence guided by the heuristic.
    ///
    /// Returns the empty sequence when `initial` is already final or when no
    /// solution was found within the memory budget.
    pub fn solve<C>(&mut self, initial: &C) -> Vec<C::Action>
    where
        C: Configuration,
        H: Heuristic<C>,
    {
        self.solve_with_stats(initial).actions
    }

    /// Like [`solve`](Self::solve), also returning run statistics.
    pub fn solve_with_stats<C>(&mut self, initial: &C) -> SearchOutcome<C::Action>
    where
        C: Configuration,
        H: Heuristic<C>,
    {
        let start = Instant::now();
        if let Some(trace) = self.trace.as_mut() {
            trace.clear();
        }
        if initial.is_final() {
            return already_solved(NAME, start);
        }
        log::debug!("{NAME}: starting search");

        let mut stats = SearchStats::new();
        let mut tree: SearchTree<C, C::Action> = SearchTree::new(initial.clone());
        let mut visited = VisitedSet::new();
        let mut open = BinaryHeap::new();
        open.push(FrontierEntry {
            priority: self.estimate(initial),
            order: 0,
            node: tree.root(),
            fingerprint: initial.fingerprint(),
        });

        let stop = self.expand_all(&mut tree, &mut visited, &mut open, &mut stats);

        stats.visited = visited.len();
        finish(NAME, &tree, stop, stats, start)
    }

    fn estimate<C>(&self, configuration: &C) -> f64
    where
        H: Heuristic<C>,
    {
        let h = self.heuristic.estimate(configuration);
        debug_assert!(h >= 0.0, "heuristic estimates must be non-negative, got {h}");
        h
    }

    fn expand_all<C>(
        &mut self,
        tree: &mut SearchTree<C, C::Action>,
        visited: &mut VisitedSet,
        open: &mut BinaryHeap<FrontierEntry>,
        stats: &mut SearchStats,
    ) -> Stop
    where
        C: Configuration,
        H: Heuristic<C>,
    {
        let mut order = 1u64;

        while let Some(entry) = open.pop() {
            let current = entry.node;
            if !visited.insert(tree, entry.fingerprint, current) {
                stats.duplicates_dropped += 1;
                continue;
            }
            stats.nodes_expanded += 1;
            if let Some(trace) = self.trace.as_mut() {
                trace.push(entry.priority);
            }

            let depth = tree.get(current).depth;
            let actions = tree.configuration(current).legal_actions();
            log::trace!(
                "{NAME}: expanding {current} at depth {depth} with priority {:.3}, {} actions",
                entry.priority,
                actions.len()
            );

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

                let priority = f64::from(depth + 1) + self.estimate(&next);
                let node = SearchNode::child(next, current, depth, action).with_priority(priority);
                let id = tree.alloc(node);
                open.push(FrontierEntry {
                    priority,
                    order,
                    node: id,
                    fingerprint,
                });
                order += 1;
            }
            stats.observe_frontier(open.len());
        }
        Stop::Exhausted
    }
}
