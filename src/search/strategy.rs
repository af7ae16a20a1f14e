//! Strategy selection.
//!
//! The three strategies form a closed set selected once by the caller; the
//! expansion loops themselves stay monomorphic.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::heuristics::{Heuristic, HeuristicKind};
use crate::memory::{MemoryGovernor, MemoryProbe, ProcessMemoryProbe};
use crate::rules::Configuration;

use super::astar::AStarSearch;
use super::bfs::BreadthFirstSearch;
use super::config::SearchConfig;
use super::dfs::DepthFirstSearch;
use super::stats::SearchOutcome;

/// Which strategy to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    BreadthFirst,
    DepthFirst,
    AStar,
}

impl StrategyKind {
    /// All strategies, in a fixed order.
    pub const ALL: [StrategyKind; 3] = [Self::BreadthFirst, Self::DepthFirst, Self::AStar];
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BreadthFirst => write!(f, "bfs"),
            Self::DepthFirst => write!(f, "dfs"),
            Self::AStar => write!(f, "astar"),
        }
    }
}

/// A configured strategy behind one `solve` capability.
#[derive(Clone, Debug)]
pub enum Solver<H = HeuristicKind, P: MemoryProbe = ProcessMemoryProbe> {
    BreadthFirst(BreadthFirstSearch<P>),
    DepthFirst(DepthFirstSearch<P>),
    AStar(AStarSearch<H, P>),
}

impl Solver<HeuristicKind, ProcessMemoryProbe> {
    /// Build the requested strategy from a validated config.
    ///
    /// Each strategy reads only the parameters that apply to it: the depth
    /// limit for depth-first search, the heuristic for best-first search, and
    /// the memory budget for all three.
    pub fn from_config(kind: StrategyKind, config: &SearchConfig) -> Result<Self> {
        config.validate()?;
        let governor = MemoryGovernor::new(config.budget).with_reserved_margin(config.reserved_margin);
        Ok(match kind {
            StrategyKind::BreadthFirst => Self::BreadthFirst(BreadthFirstSearch::with_governor(governor)),
            StrategyKind::DepthFirst => {
                Self::DepthFirst(DepthFirstSearch::with_governor(governor, config.depth_limit))
            }
            StrategyKind::AStar => Self::AStar(AStarSearch::with_governor(governor, config.heuristic)),
        })
    }
}

impl<H, P: MemoryProbe> Solver<H, P> {
    /// The selected strategy.
    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::BreadthFirst(_) => StrategyKind::BreadthFirst,
            Self::DepthFirst(_) => StrategyKind::DepthFirst,
            Self::AStar(_) => StrategyKind::AStar,
        }
    }

    /// Run the selected strategy.
    pub fn solve<C>(&mut self, initial: &C) -> Vec<C::Action>
    where
        C: Configuration,
        H: Heuristic<C>,
    {
        self.solve_with_stats(initial).actions
    }

    /// Run the selected strategy, also returning run statistics.
    pub fn solve_with_stats<C>(&mut self, initial: &C) -> SearchOutcome<C::Action>
    where
        C: Configuration,
        H: Heuristic<C>,
    {
        match self {
            Self::BreadthFirst(search) => search.solve_with_stats(initial),
            Self::DepthFirst(search) => search.solve_with_stats(initial),
            Self::AStar(search) => search.solve_with_stats(initial),
        }
    }
}
