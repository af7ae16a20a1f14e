//! Cards and suits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits, in a fixed order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Hearts and diamonds are red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// Position in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-letter symbol used in layouts.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            'c' => Some(Suit::Clubs),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// A playing card: suit plus face value from 1 (ace) to 13 (king).
///
/// Deserialization rejects values outside `1..=13`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    pub suit: Suit,
    pub value: u8,
}

/// Unchecked serialized form of a [`Card`].
#[derive(Deserialize)]
struct RawCard {
    suit: Suit,
    value: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = Error;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        if !(1..=Card::MAX_VALUE).contains(&raw.value) {
            return Err(Error::InvalidCard {
                text: format!("{}{}", raw.value, raw.suit.symbol()),
                reason: "value out of range".to_string(),
            });
        }
        Ok(Card {
            suit: raw.suit,
            value: raw.value,
        })
    }
}

impl Card {
    /// Highest face value (king).
    pub const MAX_VALUE: u8 = 13;

    /// Create a card.
    ///
    /// Panics if `value` is outside `1..=13`.
    #[must_use]
    pub fn new(suit: Suit, value: u8) -> Self {
        assert!(
            (1..=Self::MAX_VALUE).contains(&value),
            "card value must be 1-13, got {value}"
        );
        Self { suit, value }
    }

    /// Whether the card is red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        self.suit.is_red()
    }

    /// Dense index in `0..52`.
    #[must_use]
    pub const fn id(self) -> usize {
        self.suit.index() * Self::MAX_VALUE as usize + (self.value as usize - 1)
    }

    /// Whether this card may be placed on `below` in a tableau stack:
    /// one lower and of the opposite colour.
    #[must_use]
    pub const fn can_stack_on(self, below: Card) -> bool {
        below.value == self.value + 1 && below.is_red() != self.is_red()
    }

    /// The next card of the same suit, if any.
    #[must_use]
    pub fn successor(self) -> Option<Card> {
        (self.value < Self::MAX_VALUE).then(|| Card::new(self.suit, self.value + 1))
    }

    /// Well-dispersed 64-bit hash of the card, used by fingerprints.
    #[must_use]
    pub const fn mix(self) -> u64 {
        // splitmix64 finalizer over the dense id
        let mut z = (self.id() as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

/// Every card of a full deck, suit by suit, ace to king.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (1..=Card::MAX_VALUE).map(move |value| Card::new(suit, value)))
        .collect()
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            1 => write!(f, "A")?,
            11 => write!(f, "J")?,
            12 => write!(f, "Q")?,
            13 => write!(f, "K")?,
            v => write!(f, "{v}")?,
        }
        write!(f, "{}", self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| Error::InvalidCard {
            text: text.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = text.chars();
        let symbol = chars.next_back().ok_or_else(|| invalid("empty"))?;
        let suit = Suit::from_symbol(symbol).ok_or_else(|| invalid("unknown suit"))?;
        let value = match chars.as_str().to_ascii_uppercase().as_str() {
            "A" => 1,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            rank => rank
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=10).contains(v))
                .ok_or_else(|| invalid("unknown rank"))?,
        };
        Ok(Card::new(suit, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors() {
        assert!(Card::new(Suit::Hearts, 5).is_red());
        assert!(Card::new(Suit::Diamonds, 5).is_red());
        assert!(!Card::new(Suit::Clubs, 5).is_red());
        assert!(!Card::new(Suit::Spades, 5).is_red());
    }

    #[test]
    fn test_can_stack_on() {
        let red_five = Card::new(Suit::Hearts, 5);
        assert!(red_five.can_stack_on(Card::new(Suit::Spades, 6)));
        assert!(!red_five.can_stack_on(Card::new(Suit::Diamonds, 6)));
        assert!(!red_five.can_stack_on(Card::new(Suit::Spades, 7)));
        assert!(!red_five.can_stack_on(Card::new(Suit::Spades, 4)));
    }

    #[test]
    fn test_ids_are_dense_and_unique() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        let mut ids: Vec<usize> = deck.iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..DECK_SIZE).collect::<Vec<_>>());
    }

    #[test]
    fn test_mix_is_distinct_per_card() {
        let mut mixes: Vec<u64> = full_deck().iter().map(|c| c.mix()).collect();
        mixes.sort_unstable();
        mixes.dedup();
        assert_eq!(mixes.len(), DECK_SIZE);
    }

    #[test]
    fn test_display_and_parse() {
        for card in full_deck() {
            let text = card.to_string();
            assert_eq!(text.parse::<Card>().unwrap(), card);
        }
        assert_eq!("10d".parse::<Card>().unwrap(), Card::new(Suit::Diamonds, 10));
        assert_eq!("qS".parse::<Card>().unwrap(), Card::new(Suit::Spades, 12));
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<Card>().is_err());
        assert!("5x".parse::<Card>().is_err());
        assert!("1h".parse::<Card>().is_err());
        assert!("14h".parse::<Card>().is_err());
        assert!("h".parse::<Card>().is_err());
    }

    #[test]
    fn test_deserialize_checks_value() {
        let card: Card = serde_json::from_str(r#"{"suit":"Clubs","value":13}"#).unwrap();
        assert_eq!(card, Card::new(Suit::Clubs, 13));

        assert!(serde_json::from_str::<Card>(r#"{"suit":"Clubs","value":0}"#).is_err());
        assert!(serde_json::from_str::<Card>(r#"{"suit":"Clubs","value":14}"#).is_err());
    }

    #[test]
    fn test_successor() {
        assert_eq!(
            Card::new(Suit::Clubs, 3).successor(),
            Some(Card::new(Suit::Clubs, 4))
        );
        assert_eq!(Card::new(Suit::Clubs, 13).successor(), None);
    }
}
