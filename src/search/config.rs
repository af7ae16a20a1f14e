//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::heuristics::HeuristicKind;
use crate::memory::DEFAULT_RESERVED_MARGIN;

/// Default memory budget: 4 GiB.
pub const DEFAULT_BUDGET: u64 = 4 * 1024 * 1024 * 1024;

/// Default depth limit for depth-first search.
pub const DEFAULT_DEPTH_LIMIT: u32 = 100;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Resident memory budget in bytes.
    /// Expansion stops once `current + reserved_margin` would exceed it.
    pub budget: u64,

    /// Slack kept free for one expansion step, in bytes.
    pub reserved_margin: u64,

    /// Depth-first search only expands nodes shallower than this.
    pub depth_limit: u32,

    /// Evaluator used by best-first search.
    pub heuristic: HeuristicKind,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            reserved_margin: DEFAULT_RESERVED_MARGIN,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            heuristic: HeuristicKind::default(),
        }
    }
}

impl SearchConfig {
    /// Create a new config with a custom memory budget.
    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    /// Create a new config with a custom reserved margin.
    pub fn with_reserved_margin(mut self, margin: u64) -> Self {
        self.reserved_margin = margin;
        self
    }

    /// Create a new config with a custom depth limit.
    pub fn with_depth_limit(mut self, depth_limit: u32) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    /// Create a new config with a custom heuristic.
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Reject configs that could never expand a single node.
    pub fn validate(&self) -> Result<()> {
        if self.reserved_margin >= self.budget {
            return Err(Error::InvalidConfig {
                message: format!(
                    "reserved margin ({} bytes) must be below the budget ({} bytes)",
                    self.reserved_margin, self.budget
                ),
            });
        }
        Ok(())
    }
}
