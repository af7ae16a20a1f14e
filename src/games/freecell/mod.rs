//! FreeCell solitaire.
//!
//! A configuration is a set of free cells (one card each), homes (built
//! ace to king by suit) and tableau stacks (built down in alternating
//! colours). Only single cards move. The game is won when every card has
//! gone home.
//!
//! `GameState` implements [`Configuration`](crate::rules::Configuration)
//! with [`Move`] as its action type, so any strategy in
//! [`search`](crate::search) can solve it.

mod card;
mod deal;
mod layout;
mod moves;
mod pile;
mod state;

pub use card::{full_deck, Card, Suit, DECK_SIZE};
pub use deal::DealBuilder;
pub use moves::Move;
pub use pile::{FreeCell, Home, Stack};
pub use state::{GameState, DEFAULT_FREE_CELLS, DEFAULT_HOMES, DEFAULT_STACKS};
