//! Card identity: suits and ranks.
//!
//! A card is an immutable `(suit, rank)` value. Suits form a closed
//! tagged union: a configurable number of color suits drawn from a
//! fixed symbol list, plus the distinguished rocket (trump) suit.
//!
//! The derived ordering is suit-major, rank-minor and exists for hand
//! sorting and display only. Trick strength is a separate rule, decided
//! by [`crate::trick::resolve()`].

use serde::{Deserialize, Serialize};

/// Fixed, configuration-independent list of color suit symbols.
///
/// A configuration with `color_suits = n` uses the first `n` entries.
pub const SUIT_SYMBOLS: [char; 4] = ['B', 'P', 'G', 'Y'];

/// A card suit: one of the color suits, or the rocket trump suit.
///
/// `Color(i)` indexes into [`SUIT_SYMBOLS`]. Equality and ordering are
/// structural; rockets sort after all color suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Color suit by symbol index.
    Color(u8),
    /// The trump suit.
    Rocket,
}

impl Suit {
    /// The display symbol for this suit.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Suit::Color(i) => SUIT_SYMBOLS[i as usize],
            Suit::Rocket => 'R',
        }
    }

    /// Dense index for per-suit counters: colors first, rocket last.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Suit::Color(i) => i as usize,
            Suit::Rocket => SUIT_SYMBOLS.len(),
        }
    }

    /// Is this the trump suit?
    #[must_use]
    pub fn is_rocket(self) -> bool {
        matches!(self, Suit::Rocket)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An immutable playing card.
///
/// ```
/// use crew_engine::cards::{Card, Suit};
///
/// let b3 = Card::color(0, 3);
/// assert_eq!(format!("{}", b3), "B3");
/// assert!(b3 < Card::rocket(1)); // display order only
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The card's suit.
    pub suit: Suit,
    /// Rank within the suit, starting at 1.
    pub rank: u8,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Create a color card by suit symbol index.
    #[must_use]
    pub const fn color(suit_index: u8, rank: u8) -> Self {
        Self::new(Suit::Color(suit_index), rank)
    }

    /// Create a rocket card.
    #[must_use]
    pub const fn rocket(rank: u8) -> Self {
        Self::new(Suit::Rocket, rank)
    }

    /// Is this a trump card?
    #[must_use]
    pub fn is_rocket(self) -> bool {
        self.suit.is_rocket()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}
