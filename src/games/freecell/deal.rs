//! Deterministic deal generation.
//!
//! ## Usage
//!
//! ```
//! use freecell_search::games::freecell::DealBuilder;
//!
//! // Same seed, same deal
//! let a = DealBuilder::new().deal(42);
//! let b = DealBuilder::new().deal(42);
//! assert_eq!(a, b);
//! assert_eq!(a.cards_in_tableau(), 52);
//!
//! // Six cards lifted off complete homes
//! let easy = DealBuilder::new().scrambled(42, 6);
//! assert_eq!(easy.cards_home(), 46);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::card::{full_deck, Card, Suit};
use super::state::{GameState, DEFAULT_FREE_CELLS, DEFAULT_HOMES, DEFAULT_STACKS};
use crate::error::{Error, Result};

/// Builds starting configurations with a chosen pile layout.
///
/// Deserialization runs [`DealBuilder::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DealLayout")]
pub struct DealBuilder {
    /// Number of free cells.
    pub free_cells: usize,
    /// Number of homes. Suits beyond the fourth home have nowhere to go.
    pub homes: usize,
    /// Number of tableau stacks.
    pub stacks: usize,
}

/// Unchecked serialized form of a [`DealBuilder`].
#[derive(Deserialize)]
struct DealLayout {
    free_cells: usize,
    homes: usize,
    stacks: usize,
}

impl TryFrom<DealLayout> for DealBuilder {
    type Error = Error;

    fn try_from(layout: DealLayout) -> Result<Self> {
        let builder = Self {
            free_cells: layout.free_cells,
            homes: layout.homes,
            stacks: layout.stacks,
        };
        builder.validate()?;
        Ok(builder)
    }
}

impl Default for DealBuilder {
    fn default() -> Self {
        Self {
            free_cells: DEFAULT_FREE_CELLS,
            homes: DEFAULT_HOMES,
            stacks: DEFAULT_STACKS,
        }
    }
}

impl DealBuilder {
    /// Standard layout: 4 free cells, 4 homes, 8 stacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of free cells.
    #[must_use]
    pub fn with_free_cells(mut self, count: usize) -> Self {
        self.free_cells = count;
        self
    }

    /// Set the number of homes.
    #[must_use]
    pub fn with_homes(mut self, count: usize) -> Self {
        self.homes = count;
        self
    }

    /// Set the number of tableau stacks. Panics on zero.
    #[must_use]
    pub fn with_stacks(mut self, count: usize) -> Self {
        assert!(count > 0, "a deal needs at least one stack");
        self.stacks = count;
        self
    }

    /// Check that the layout can hold a deal: at least one stack.
    pub fn validate(&self) -> Result<()> {
        if self.stacks == 0 {
            return Err(Error::InvalidConfig {
                message: "a deal needs at least one stack".to_string(),
            });
        }
        Ok(())
    }

    /// Shuffle a full deck and deal it round-robin onto the stacks.
    ///
    /// Panics if the builder fails [`DealBuilder::validate`].
    #[must_use]
    pub fn deal(&self, seed: u64) -> GameState {
        assert!(self.stacks > 0, "a deal needs at least one stack");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = full_deck();
        deck.shuffle(&mut rng);

        let mut stacks = vec![Vec::new(); self.stacks];
        for (i, card) in deck.into_iter().enumerate() {
            stacks[i % self.stacks].push(card);
        }
        GameState::from_parts(vec![None; self.free_cells], vec![None; self.homes], stacks)
    }

    /// Start from complete homes and lift `moves` random home tops onto
    /// random stacks.
    ///
    /// Replaying the lifts in reverse sends every card home, so the result
    /// is solvable in at most `moves` moves. Only as many suits as there are
    /// homes (up to four) take part. Panics if the builder fails
    /// [`DealBuilder::validate`].
    #[must_use]
    pub fn scrambled(&self, seed: u64, moves: usize) -> GameState {
        assert!(self.stacks > 0, "a deal needs at least one stack");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut homes: Vec<Option<Card>> = (0..self.homes)
            .map(|i| Suit::ALL.get(i).map(|&suit| Card::new(suit, Card::MAX_VALUE)))
            .collect();
        let mut stacks = vec![Vec::new(); self.stacks];

        for _ in 0..moves {
            let occupied: Vec<usize> = (0..homes.len()).filter(|&i| homes[i].is_some()).collect();
            let Some(&home) = occupied.choose(&mut rng) else {
                break;
            };
            let Some(card) = homes[home] else {
                break;
            };
            homes[home] = (card.value > 1).then(|| Card::new(card.suit, card.value - 1));
            stacks[rng.gen_range(0..self.stacks)].push(card);
        }
        GameState::from_parts(vec![None; self.free_cells], homes, stacks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Configuration;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_deal_uses_full_deck() {
        let state = DealBuilder::new().deal(7);
        let cards: FxHashSet<Card> = state.all_cards().collect();
        assert_eq!(cards.len(), 52);
        assert_eq!(state.stack(0).unwrap().len(), 7);
        assert_eq!(state.stack(7).unwrap().len(), 6);
        assert!(!state.is_final());
    }

    #[test]
    fn test_deal_is_deterministic() {
        let builder = DealBuilder::new();
        assert_eq!(builder.deal(1), builder.deal(1));
        assert_ne!(builder.deal(1), builder.deal(2));
    }

    #[test]
    fn test_custom_layout() {
        let state = DealBuilder::new().with_free_cells(2).with_stacks(4).deal(3);
        assert_eq!(state.free_cells().len(), 2);
        assert_eq!(state.stack_count(), 4);
        assert_eq!(state.stack(0).unwrap().len(), 13);
    }

    #[test]
    fn test_validate() {
        assert!(DealBuilder::new().validate().is_ok());
        let empty = DealBuilder {
            stacks: 0,
            ..DealBuilder::new()
        };
        assert!(matches!(empty.validate(), Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_deserialize_rejects_zero_stacks() {
        let json = r#"{"free_cells":4,"homes":4,"stacks":0}"#;
        assert!(serde_json::from_str::<DealBuilder>(json).is_err());

        let json = serde_json::to_string(&DealBuilder::new().with_stacks(5)).unwrap();
        let back: DealBuilder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.stacks, 5);
    }

    #[test]
    #[should_panic(expected = "at least one stack")]
    fn test_deal_panics_without_stacks() {
        let empty = DealBuilder {
            stacks: 0,
            ..DealBuilder::new()
        };
        let _ = empty.deal(1);
    }

    #[test]
    fn test_scrambled_zero_moves_is_final() {
        let state = DealBuilder::new().scrambled(9, 0);
        assert!(state.is_final());
        assert_eq!(state.cards_home(), 52);
    }

    #[test]
    fn test_scrambled_lifts_cards() {
        let state = DealBuilder::new().scrambled(9, 10);
        assert_eq!(state.cards_in_tableau(), 10);
        assert_eq!(state.cards_home() + state.cards_in_tableau(), 52);
        assert!(!state.legal_actions().is_empty());
    }

    #[test]
    fn test_scrambled_stops_when_homes_are_empty() {
        let state = DealBuilder::new().with_homes(1).scrambled(4, 100);
        assert_eq!(state.cards_in_tableau(), 13);
        assert_eq!(state.cards_home(), 0);
    }
}
