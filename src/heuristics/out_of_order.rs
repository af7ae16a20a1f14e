//! Tableau disorder.

use crate::games::freecell::{GameState, DECK_SIZE};

/// Adjacent pairs within each stack where the deeper card has a higher
/// value than the card directly on top of it, divided by the deck size.
///
/// Always below 1.0, so it mostly breaks ties when blended with a
/// card count.
#[must_use]
pub fn out_of_order(state: &GameState) -> f64 {
    let pairs: usize = state
        .stacks()
        .map(|stack| {
            stack
                .iter()
                .zip(stack.iter().skip(1))
                .filter(|(deeper, above)| deeper.value > above.value)
                .count()
        })
        .sum();
    pairs as f64 / DECK_SIZE as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_stack_counts_every_pair() {
        let state = GameState::parse("cells: --\nhomes: --\nstack: Kd Qs Jh 10c\n").unwrap();
        assert_eq!(out_of_order(&state), 3.0 / 52.0);
    }

    #[test]
    fn test_ascending_stack_counts_nothing() {
        let state = GameState::parse("cells: --\nhomes: --\nstack: 2d 5s 9h Kc\n").unwrap();
        assert_eq!(out_of_order(&state), 0.0);
    }

    #[test]
    fn test_counts_higher_under_lower() {
        let state = GameState::parse("cells: --\nhomes: --\nstack: 2d 9s 4h Kc\n").unwrap();
        // Only 9s>4h
        assert_eq!(out_of_order(&state), 1.0 / 52.0);
    }

    #[test]
    fn test_pairs_do_not_cross_stacks() {
        let state = GameState::parse("cells: --\nhomes: --\nstack: 9s\nstack: 2d\n").unwrap();
        assert_eq!(out_of_order(&state), 0.0);
    }
}
