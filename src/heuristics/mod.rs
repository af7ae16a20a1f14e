//! Distance estimates for best-first search.
//!
//! ## Overview
//!
//! A [`Heuristic`] maps a configuration to a non-negative estimate of the
//! remaining distance to a final configuration. Estimates are pure: they
//! look only at the configuration, never at how it was reached.
//!
//! None of the FreeCell evaluators are admissible, so best-first search
//! with them is greedy rather than shortest-path optimal.
//!
//! - [`ZeroHeuristic`]: always 0, for any configuration type
//! - closures `Fn(&C) -> f64`: ad-hoc estimates
//! - [`HeuristicKind`]: the FreeCell evaluators selected by name
//!
//! ## Usage
//!
//! ```
//! use freecell_search::games::freecell::DealBuilder;
//! use freecell_search::heuristics::{Heuristic, HeuristicKind};
//!
//! let state = DealBuilder::new().scrambled(3, 5);
//! assert_eq!(HeuristicKind::CardsNotHome.estimate(&state), 5.0);
//! ```

mod blended;
mod cards_not_home;
mod out_of_order;
mod shallowest;

pub use blended::blended;
pub use cards_not_home::cards_not_home;
pub use out_of_order::out_of_order;
pub use shallowest::shallowest_acceptable;

use serde::{Deserialize, Serialize};

use crate::games::freecell::GameState;

/// Estimates the remaining distance from a configuration to a final one.
pub trait Heuristic<C> {
    /// Non-negative estimate for `configuration`.
    fn estimate(&self, configuration: &C) -> f64;
}

impl<C, F> Heuristic<C> for F
where
    F: Fn(&C) -> f64,
{
    fn estimate(&self, configuration: &C) -> f64 {
        self(configuration)
    }
}

/// Estimates 0 everywhere. Best-first search degrades to uniform cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl<C> Heuristic<C> for ZeroHeuristic {
    fn estimate(&self, _configuration: &C) -> f64 {
        0.0
    }
}

/// FreeCell evaluators, selectable from a config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeuristicKind {
    /// Adjacent stack pairs with the higher card underneath, over the deck size.
    OutOfOrder,
    /// Cards not home, adjusted by free cell availability.
    CardsNotHome,
    /// Summed depths of the next card each home needs.
    ShallowestAcceptable,
    /// Half of `CardsNotHome + OutOfOrder`, rounded down.
    #[default]
    Blended,
}

impl HeuristicKind {
    /// All evaluators, in a fixed order.
    pub const ALL: [HeuristicKind; 4] = [
        Self::OutOfOrder,
        Self::CardsNotHome,
        Self::ShallowestAcceptable,
        Self::Blended,
    ];
}

impl Heuristic<GameState> for HeuristicKind {
    fn estimate(&self, state: &GameState) -> f64 {
        match self {
            Self::OutOfOrder => out_of_order(state),
            Self::CardsNotHome => cards_not_home(state),
            Self::ShallowestAcceptable => shallowest_acceptable(state),
            Self::Blended => blended(state),
        }
    }
}
