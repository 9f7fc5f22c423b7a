//! Per-suit card counts for a hand.
//!
//! Kept in lockstep with the owning hand so follow-suit legality is an
//! O(1) lookup instead of a hand scan. Invariant: `count(suit)` equals
//! the number of cards of that suit currently in the hand.

use serde::{Deserialize, Serialize};

use super::card::{Card, Suit, SUIT_SYMBOLS};

/// One counter slot per color suit plus one for rockets.
const SUIT_SLOTS: usize = SUIT_SYMBOLS.len() + 1;

/// Multiset count of a hand's remaining cards per suit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitCounter {
    counts: [u8; SUIT_SLOTS],
}

impl SuitCounter {
    /// Build a counter from a hand.
    #[must_use]
    pub fn tally(cards: &[Card]) -> Self {
        let mut counter = Self::default();
        for card in cards {
            counter.add(card.suit);
        }
        counter
    }

    /// Cards of `suit` remaining in the hand.
    #[must_use]
    pub fn count(&self, suit: Suit) -> u8 {
        self.counts[suit.index()]
    }

    /// True when the hand holds no cards of `suit`.
    #[must_use]
    pub fn is_void(&self, suit: Suit) -> bool {
        self.count(suit) == 0
    }

    /// Record a card entering the hand.
    pub fn add(&mut self, suit: Suit) {
        self.counts[suit.index()] += 1;
    }

    /// Record a card leaving the hand.
    pub fn remove(&mut self, suit: Suit) {
        debug_assert!(self.counts[suit.index()] > 0, "suit counter underflow");
        self.counts[suit.index()] -= 1;
    }
}
