//! Default FreeCell evaluator.

use super::{cards_not_home, out_of_order};
use crate::games::freecell::GameState;

/// `floor((cards_not_home + out_of_order) / 2)`.
#[must_use]
pub fn blended(state: &GameState) -> f64 {
    ((cards_not_home(state) + out_of_order(state)) / 2.0).floor()
}
