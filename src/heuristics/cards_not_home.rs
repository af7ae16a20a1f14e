//! Coarse distance: how many cards still have to go home.

use crate::games::freecell::GameState;

/// Cards in the tableau, plus the free cells that could not take the lead
/// card (top of the first stack). With no lead card every occupied free
/// cell counts.
#[must_use]
pub fn cards_not_home(state: &GameState) -> f64 {
    let blocked_cells = match state.lead_card() {
        Some(lead) => state.free_cells().iter().filter(|cell| !cell.can_accept(lead)).count(),
        None => state.cards_in_free_cells(),
    };
    (state.cards_in_tableau() + blocked_cells) as f64
}
