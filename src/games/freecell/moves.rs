//! FreeCell moves.
//!
//! Moves are plain data: indices into the piles of the configuration they
//! were generated from. They stay replayable as long as they are applied in
//! the order they were produced.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single-card move between piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Top card of a stack onto a home.
    StackToHome { stack: u8, home: u8 },
    /// Card in a free cell onto a home.
    FreeCellToHome { cell: u8, home: u8 },
    /// Card in a free cell onto a stack.
    FreeCellToStack { cell: u8, stack: u8 },
    /// Top card of one stack onto another.
    StackToStack { from: u8, to: u8 },
    /// Top card of a stack into an empty free cell.
    StackToFreeCell { stack: u8, cell: u8 },
}

impl Move {
    /// Whether the move ends on a home pile.
    #[must_use]
    pub fn is_home_move(&self) -> bool {
        matches!(self, Move::StackToHome { .. } | Move::FreeCellToHome { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::StackToHome { stack, home } => write!(f, "stack {stack} -> home {home}"),
            Move::FreeCellToHome { cell, home } => write!(f, "cell {cell} -> home {home}"),
            Move::FreeCellToStack { cell, stack } => write!(f, "cell {cell} -> stack {stack}"),
            Move::StackToStack { from, to } => write!(f, "stack {from} -> stack {to}"),
            Move::StackToFreeCell { stack, cell } => write!(f, "stack {stack} -> cell {cell}"),
        }
    }
}
