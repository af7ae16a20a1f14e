//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Why a search run stopped.
///
/// Informational only: `solve` returns the same empty sequence for
/// `AlreadySolved`, `Exhausted` and `MemoryLimit`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// A final configuration was generated.
    Solved,
    /// The initial configuration was already final.
    AlreadySolved,
    /// The frontier emptied without a final configuration.
    #[default]
    Exhausted,
    /// The memory governor vetoed an expansion.
    MemoryLimit,
}

/// Statistics collected during one search run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes popped and expanded.
    pub nodes_expanded: u64,

    /// Successor nodes constructed.
    pub nodes_generated: u64,

    /// Nodes discarded because their configuration was already visited.
    pub duplicates_dropped: u64,

    /// Nodes popped at or beyond the depth limit (depth-first only).
    pub depth_cutoffs: u64,

    /// Largest frontier size observed.
    pub peak_frontier: usize,

    /// Distinct configurations in the visited set at the end.
    pub visited: usize,

    /// Deepest node generated.
    pub max_depth: u32,

    /// How the run ended.
    pub termination: Termination,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a frontier size, keeping the high-water mark.
    #[inline]
    pub fn observe_frontier(&mut self, size: usize) {
        self.peak_frontier = self.peak_frontier.max(size);
    }

    /// Record a generated node at `depth`.
    #[inline]
    pub fn observe_generated(&mut self, depth: u32) {
        self.nodes_generated += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Calculate expansions per second.
    #[must_use]
    pub fn expansions_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average successors generated per expansion.
    #[must_use]
    pub fn avg_branching(&self) -> f64 {
        if self.nodes_expanded == 0 {
            0.0
        } else {
            self.nodes_generated as f64 / self.nodes_expanded as f64
        }
    }
}

/// Actions found by a run together with its statistics.
#[derive(Clone, Debug)]
pub struct SearchOutcome<A> {
    /// Root-to-terminal actions; empty when unsolved or already solved.
    pub actions: Vec<A>,

    /// Statistics for the run.
    pub stats: SearchStats,
}

impl<A> SearchOutcome<A> {
    /// Whether the run generated a final configuration.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.stats.termination == Termination::Solved
    }
}
