//! # freecell-search
//!
//! A memory-bounded state-space search engine for solitaire, with FreeCell
//! as the bundled game.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Search**: Strategies only see the
//!    `rules::Configuration` trait. The FreeCell rules are one implementation
//!    of it.
//!
//! 2. **Actions, Not Verdicts**: A successful search returns the ordered
//!    actions that lead from the initial configuration to a final one.
//!
//! 3. **Bounded by Memory**: Every successor generation asks a
//!    `MemoryGovernor` first. Running out of budget is an ordinary
//!    "no solution" result, not an error.
//!
//! ## Architecture
//!
//! - **Arena Nodes**: Nodes live in a per-run `SearchTree` and point at
//!   their parent by `NodeId`. Path reconstruction walks those links.
//!
//! - **Content Deduplication**: The visited set is keyed by a 64-bit
//!   fingerprint and resolved with configuration equality, so hash
//!   collisions never drop distinct configurations.
//!
//! - **Persistent Data Structures**: Tableau stacks use `im` vectors, so
//!   producing a successor clones in O(1) per untouched pile.
//!
//! ## Modules
//!
//! - `rules`: `Configuration` trait consumed by the search
//! - `memory`: resident memory probes and the `MemoryGovernor`
//! - `search`: node arena, visited set, the three strategies, statistics
//! - `heuristics`: distance estimates for best-first search
//! - `games`: FreeCell rules, deals and layouts
//! - `error`: error type for the fallible edges (parsing, snapshots, config)

pub mod error;
pub mod games;
pub mod heuristics;
pub mod memory;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::error::{Error, Result};

pub use crate::rules::{replay, Configuration};

pub use crate::memory::{FixedProbe, MemoryGovernor, MemoryProbe, ProcessMemoryProbe};

pub use crate::search::{
    AStarSearch, BreadthFirstSearch, DepthFirstSearch, Fingerprint, NodeId, SearchConfig,
    SearchOutcome, SearchStats, Solver, StrategyKind, Termination,
};

pub use crate::heuristics::{Heuristic, HeuristicKind, ZeroHeuristic};

pub use crate::games::freecell::{Card, DealBuilder, GameState, Move, Suit};
