//! Digging cost for the next card of each home.

use crate::games::freecell::{GameState, Home};

/// Cards sitting above the shallowest tableau card `home` accepts.
///
/// Zero when the home is complete, when a free cell already holds an
/// acceptable card, or when no acceptable card is in play.
fn digging_depth(state: &GameState, home: &Home) -> usize {
    if home.is_complete() {
        return 0;
    }
    let in_cell = state
        .free_cells()
        .iter()
        .filter_map(|cell| cell.top_card())
        .any(|card| home.can_accept(card));
    if in_cell {
        return 0;
    }
    state
        .stacks()
        .filter_map(|stack| stack.iter().rev().position(|card| home.can_accept(card)))
        .min()
        .unwrap_or(0)
}

/// Sum over homes of the depth of the next card each one needs, doubled
/// when there is a lead card and every free cell is occupied.
#[must_use]
pub fn shallowest_acceptable(state: &GameState) -> f64 {
    let depth: usize = state.homes().iter().map(|home| digging_depth(state, home)).sum();
    let stuck = state
        .lead_card()
        .map_or(false, |lead| !state.free_cells().iter().any(|cell| cell.can_accept(lead)));
    let total = if stuck { depth * 2 } else { depth };
    total as f64
}
