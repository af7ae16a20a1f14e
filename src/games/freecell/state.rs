//! FreeCell configuration: free cells, homes and tableau stacks.
//!
//! `GameState` is immutable from the search's point of view: `apply`
//! returns a new state. Stacks are persistent `im` vectors, so the clone
//! made for each successor shares all untouched piles with its parent.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use super::moves::Move;
use super::pile::{FreeCell, Home, Stack};
use crate::error::{Error, Result};
use crate::rules::Configuration;
use crate::search::fingerprint::{hash_combine, Fingerprint};

/// Standard number of free cells.
pub const DEFAULT_FREE_CELLS: usize = 4;
/// Standard number of homes (one per suit).
pub const DEFAULT_HOMES: usize = 4;
/// Standard number of tableau stacks.
pub const DEFAULT_STACKS: usize = 8;

/// Mixed in after each stack so cards cannot slide between stacks unnoticed.
const STACK_SEPARATOR: u64 = 0x5bd1_e995;

/// A complete FreeCell configuration.
///
/// Equality is exact structural equality over cells (by slot), homes and
/// stacks (in order).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    free_cells: SmallVec<[FreeCell; 4]>,
    homes: SmallVec<[Home; 4]>,
    stacks: Vector<Stack>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::empty(DEFAULT_FREE_CELLS, DEFAULT_HOMES, DEFAULT_STACKS)
    }
}

impl GameState {
    /// Create a state with no cards in play.
    #[must_use]
    pub fn empty(free_cells: usize, homes: usize, stacks: usize) -> Self {
        Self {
            free_cells: SmallVec::from_elem(FreeCell::default(), free_cells),
            homes: SmallVec::from_elem(Home::default(), homes),
            stacks: (0..stacks).map(|_| Stack::new()).collect(),
        }
    }

    /// Assemble a state from raw piles.
    ///
    /// `stacks` lists each stack bottom to top. No validation is done here;
    /// use [`GameState::parse`] for checked input.
    #[must_use]
    pub fn from_parts(
        free_cells: Vec<Option<Card>>,
        homes: Vec<Option<Card>>,
        stacks: Vec<Vec<Card>>,
    ) -> Self {
        Self {
            free_cells: free_cells.into_iter().map(FreeCell).collect(),
            homes: homes.into_iter().map(Home).collect(),
            stacks: stacks.into_iter().map(Stack::from_cards).collect(),
        }
    }

    /// Free cells, by slot.
    #[must_use]
    pub fn free_cells(&self) -> &[FreeCell] {
        &self.free_cells
    }

    /// Homes, by slot.
    #[must_use]
    pub fn homes(&self) -> &[Home] {
        &self.homes
    }

    /// Tableau stacks, in order.
    pub fn stacks(&self) -> impl ExactSizeIterator<Item = &Stack> + '_ {
        self.stacks.iter()
    }

    /// Number of tableau stacks.
    #[must_use]
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    /// Get a stack by index.
    #[must_use]
    pub fn stack(&self, index: usize) -> Option<&Stack> {
        self.stacks.get(index)
    }

    /// Top card of the first stack.
    #[must_use]
    pub fn lead_card(&self) -> Option<Card> {
        self.stacks.front().and_then(Stack::top_card)
    }

    /// Cards in the tableau.
    #[must_use]
    pub fn cards_in_tableau(&self) -> usize {
        self.stacks.iter().map(Stack::len).sum()
    }

    /// Cards in free cells.
    #[must_use]
    pub fn cards_in_free_cells(&self) -> usize {
        self.free_cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Cards already home.
    #[must_use]
    pub fn cards_home(&self) -> usize {
        self.homes.iter().map(Home::len).sum()
    }

    /// Every card in the configuration: cells, homes, then stacks.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.free_cells
            .iter()
            .filter_map(FreeCell::top_card)
            .chain(self.homes.iter().flat_map(Home::cards))
            .chain(self.stacks.iter().flat_map(Stack::iter))
    }

    /// Encode as a compact binary snapshot.
    pub fn to_snapshot(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`GameState::to_snapshot`].
    ///
    /// Rejects out-of-range cards and any card present twice.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self> {
        let state: Self = bincode::deserialize(bytes)?;
        state.check_unique_cards()?;
        Ok(state)
    }

    /// Fail on the first card present twice, counting cards implied by
    /// home tops.
    pub(crate) fn check_unique_cards(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        match self.all_cards().find(|&card| !seen.insert(card)) {
            Some(card) => Err(Error::DuplicateCard {
                card: card.to_string(),
            }),
            None => Ok(()),
        }
    }

    // === Move generation ===

    fn first_accepting_home(&self, card: Card) -> Option<u8> {
        self.homes
            .iter()
            .position(|h| h.can_accept(card))
            .map(|i| i as u8)
    }

    fn first_empty_cell(&self) -> Option<u8> {
        self.free_cells
            .iter()
            .position(|c| !c.is_occupied())
            .map(|i| i as u8)
    }

    /// Stacks that accept `card`, skipping `exclude`. Empty stacks are
    /// interchangeable, so only the first one is offered.
    fn accepting_stacks(&self, card: Card, exclude: Option<usize>) -> impl Iterator<Item = u8> + '_ {
        let first_empty = self.stacks.iter().position(Stack::is_empty);
        self.stacks
            .iter()
            .enumerate()
            .filter(move |&(i, stack)| {
                Some(i) != exclude
                    && stack.can_accept(card)
                    && (!stack.is_empty() || Some(i) == first_empty)
            })
            .map(|(i, _)| i as u8)
    }

    fn generate_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(32);

        for (cell, card) in self.occupied_cells() {
            if let Some(home) = self.first_accepting_home(card) {
                moves.push(Move::FreeCellToHome { cell, home });
            }
        }
        for (stack, card) in self.stack_tops() {
            if let Some(home) = self.first_accepting_home(card) {
                moves.push(Move::StackToHome { stack, home });
            }
        }
        for (cell, card) in self.occupied_cells() {
            for stack in self.accepting_stacks(card, None) {
                moves.push(Move::FreeCellToStack { cell, stack });
            }
        }
        for (from, card) in self.stack_tops() {
            let lone = self.stacks[from as usize].len() == 1;
            for to in self.accepting_stacks(card, Some(from as usize)) {
                // A lone card moving to an empty stack only relabels stacks
                if lone && self.stacks[to as usize].is_empty() {
                    continue;
                }
                moves.push(Move::StackToStack { from, to });
            }
        }
        if let Some(cell) = self.first_empty_cell() {
            for (stack, _) in self.stack_tops() {
                moves.push(Move::StackToFreeCell { stack, cell });
            }
        }
        moves
    }

    fn occupied_cells(&self) -> impl Iterator<Item = (u8, Card)> + '_ {
        self.free_cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.top_card().map(|card| (i as u8, card)))
    }

    fn stack_tops(&self) -> impl Iterator<Item = (u8, Card)> + '_ {
        self.stacks
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.top_card().map(|card| (i as u8, card)))
    }

    // === Move application ===
    //
    // Applying an illegal move is a caller bug: moves are only valid on the
    // configuration that generated them.

    fn take_from_stack(&mut self, index: u8) -> Card {
        match self.stacks.get_mut(index as usize).and_then(Stack::pop) {
            Some(card) => card,
            None => panic!("illegal move: stack {index} is missing or empty"),
        }
    }

    fn take_from_cell(&mut self, index: u8) -> Card {
        match self.free_cells.get_mut(index as usize).and_then(|c| c.0.take()) {
            Some(card) => card,
            None => panic!("illegal move: free cell {index} is missing or empty"),
        }
    }

    fn put_home(&mut self, index: u8, card: Card) {
        match self.homes.get_mut(index as usize) {
            Some(home) if home.can_accept(card) => home.0 = Some(card),
            _ => panic!("illegal move: home {index} cannot accept {card}"),
        }
    }

    fn put_stack(&mut self, index: u8, card: Card) {
        match self.stacks.get_mut(index as usize) {
            Some(stack) if stack.can_accept(card) => stack.push(card),
            _ => panic!("illegal move: stack {index} cannot accept {card}"),
        }
    }

    fn put_cell(&mut self, index: u8, card: Card) {
        match self.free_cells.get_mut(index as usize) {
            Some(cell) if cell.can_accept(card) => cell.0 = Some(card),
            _ => panic!("illegal move: free cell {index} cannot accept {card}"),
        }
    }
}

impl Fingerprint for GameState {
    fn fingerprint(&self) -> u64 {
        // Free cells are interchangeable slots: XOR ignores their order.
        let cells = self
            .free_cells
            .iter()
            .filter_map(FreeCell::top_card)
            .fold(0u64, |acc, card| acc ^ card.mix());

        self.stacks.iter().fold(cells, |hash, stack| {
            let hash = stack.iter().fold(hash, |h, card| hash_combine(h, card.mix()));
            hash_combine(hash, STACK_SEPARATOR)
        })
    }
}

impl Configuration for GameState {
    type Action = Move;

    /// Solved when every card has gone home.
    fn is_final(&self) -> bool {
        self.stacks.iter().all(Stack::is_empty) && self.free_cells.iter().all(|c| !c.is_occupied())
    }

    fn legal_actions(&self) -> Vec<Move> {
        self.generate_moves()
    }

    fn apply(&self, mv: &Move) -> Self {
        let mut next = self.clone();
        match *mv {
            Move::StackToHome { stack, home } => {
                let card = next.take_from_stack(stack);
                next.put_home(home, card);
            }
            Move::FreeCellToHome { cell, home } => {
                let card = next.take_from_cell(cell);
                next.put_home(home, card);
            }
            Move::FreeCellToStack { cell, stack } => {
                let card = next.take_from_cell(cell);
                next.put_stack(stack, card);
            }
            Move::StackToStack { from, to } => {
                let card = next.take_from_stack(from);
                next.put_stack(to, card);
            }
            Move::StackToFreeCell { stack, cell } => {
                let card = next.take_from_stack(stack);
                next.put_cell(cell, card);
            }
        }
        next
    }
}
