//! Card destinations: free cells, homes (foundations) and tableau stacks.
//!
//! Each pile only knows which cards it accepts; move generation and
//! application live on `GameState`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// A free cell holding at most one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FreeCell(pub Option<Card>);

impl FreeCell {
    /// The card in the cell, if any.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.0
    }

    /// A free cell accepts any card while empty.
    #[must_use]
    pub fn can_accept(&self, _card: Card) -> bool {
        self.0.is_none()
    }

    /// Whether the cell holds a card.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.0.is_some()
    }
}

/// A home pile, built up by suit from ace to king.
///
/// Only the top card is stored: every lower card of the suit is implied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Home(pub Option<Card>);

impl Home {
    /// The top card, if any.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.0
    }

    /// An empty home accepts any ace; otherwise the next card of its suit.
    #[must_use]
    pub fn can_accept(&self, card: Card) -> bool {
        match self.0 {
            None => card.value == 1,
            Some(top) => top.suit == card.suit && top.value + 1 == card.value,
        }
    }

    /// Whether the home holds its king.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.map_or(false, |top| top.value == Card::MAX_VALUE)
    }

    /// Number of cards in the home.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.map_or(0, |top| top.value as usize)
    }

    /// Whether the home holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Every card in the home, ace first.
    pub fn cards(&self) -> impl Iterator<Item = Card> {
        let top = self.0;
        (1..=top.map_or(0, |c| c.value)).filter_map(move |value| top.map(|c| Card::new(c.suit, value)))
    }
}

/// A tableau stack. The last card is the top (the only movable one).
///
/// Backed by an `im::Vector` so cloning a configuration shares structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stack {
    cards: Vector<Card>,
}

impl Stack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack from cards listed bottom to top.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// The top card, if any.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// An empty stack accepts any card; otherwise a card one lower of the
    /// opposite colour than the top.
    #[must_use]
    pub fn can_accept(&self, card: Card) -> bool {
        match self.top_card() {
            None => true,
            Some(top) => card.can_stack_on(top),
        }
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Card> + ExactSizeIterator + '_ {
        self.cards.iter().copied()
    }
}
