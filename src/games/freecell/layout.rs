//! Text layout of a FreeCell configuration.
//!
//! ```text
//! cells: 5h -- -- --
//! homes: 2s -- -- --
//! stack: Kd Qs Jh
//! stack:
//! ```
//!
//! One `cells:` line, one `homes:` line and one `stack:` line per tableau
//! stack, bottom card first. `--` marks an empty cell or home. A home lists
//! only its top card. Blank lines and lines starting with `#` are ignored.

use std::fmt;

use rustc_hash::FxHashSet;

use super::card::Card;
use super::state::GameState;
use crate::error::{Error, Result};

const EMPTY_SLOT: &str = "--";

fn write_slots(f: &mut fmt::Formatter<'_>, label: &str, slots: impl Iterator<Item = Option<Card>>) -> fmt::Result {
    write!(f, "{label}:")?;
    for slot in slots {
        match slot {
            Some(card) => write!(f, " {card}")?,
            None => write!(f, " {EMPTY_SLOT}")?,
        }
    }
    writeln!(f)
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_slots(f, "cells", self.free_cells().iter().map(|c| c.top_card()))?;
        write_slots(f, "homes", self.homes().iter().map(|h| h.top_card()))?;
        for stack in self.stacks() {
            write!(f, "stack:")?;
            for card in stack.iter() {
                write!(f, " {card}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn parse_slot(token: &str) -> Result<Option<Card>> {
    if token == EMPTY_SLOT {
        Ok(None)
    } else {
        token.parse().map(Some)
    }
}

fn parse_slots(tokens: &str) -> Result<Vec<Option<Card>>> {
    tokens.split_whitespace().map(parse_slot).collect()
}

impl GameState {
    /// Parse the text layout.
    ///
    /// Rejects unknown line labels, repeated `cells:`/`homes:` lines,
    /// missing sections, and any card appearing twice (cards implied by a
    /// home's top count as present).
    pub fn parse(text: &str) -> Result<Self> {
        let mut free_cells = None;
        let mut homes = None;
        let mut stacks = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let invalid = |message: String| Error::InvalidLayout { line, message };

            let (label, rest) = trimmed
                .split_once(':')
                .ok_or_else(|| invalid(format!("expected `label: cards`, got `{trimmed}`")))?;

            match label.trim() {
                "cells" => {
                    if free_cells.replace(parse_slots(rest)?).is_some() {
                        return Err(invalid("duplicate `cells:` line".to_string()));
                    }
                }
                "homes" => {
                    let parsed = parse_slots(rest)?;
                    let mut suits = FxHashSet::default();
                    if !parsed.iter().flatten().all(|card| suits.insert(card.suit)) {
                        return Err(invalid("two homes share a suit".to_string()));
                    }
                    if homes.replace(parsed).is_some() {
                        return Err(invalid("duplicate `homes:` line".to_string()));
                    }
                }
                "stack" => {
                    let cards = rest
                        .split_whitespace()
                        .map(str::parse)
                        .collect::<Result<Vec<Card>>>()?;
                    stacks.push(cards);
                }
                other => return Err(invalid(format!("unknown label `{other}`"))),
            }
        }

        let end = text.lines().count();
        let missing = |section: &str| Error::InvalidLayout {
            line: end,
            message: format!("missing `{section}:` line"),
        };
        let free_cells = free_cells.ok_or_else(|| missing("cells"))?;
        let homes = homes.ok_or_else(|| missing("homes"))?;
        if stacks.is_empty() {
            return Err(missing("stack"));
        }

        let state = GameState::from_parts(free_cells, homes, stacks);
        state.check_unique_cards()?;
        Ok(state)
    }
}
