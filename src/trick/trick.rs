//! The open trick: one play per seat, in play order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Suit};
use crate::core::PlayerId;

/// One card played by one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// The seat that played.
    pub seat: PlayerId,
    /// The card played.
    pub card: Card,
}

/// The trick currently being played.
///
/// Plays accumulate in play order, one per seat; the trick is resolved
/// and cleared exactly when every seat has played. `SmallVec` keeps the
/// common table sizes off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    plays: SmallVec<[Play; 5]>,
}

impl Trick {
    /// Create an empty trick.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a play.
    pub fn push(&mut self, seat: PlayerId, card: Card) {
        self.plays.push(Play { seat, card });
    }

    /// Number of plays so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// True before the lead card is played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// True when every one of `active_players` seats has played.
    ///
    /// Resolution triggers exactly at this point. Seats whose hands
    /// have emptied are no longer counted.
    #[must_use]
    pub fn is_full(&self, active_players: usize) -> bool {
        self.plays.len() == active_players
    }

    /// The lead play, if any.
    #[must_use]
    pub fn lead(&self) -> Option<&Play> {
        self.plays.first()
    }

    /// The suit led, if any.
    #[must_use]
    pub fn lead_suit(&self) -> Option<Suit> {
        self.lead().map(|play| play.card.suit)
    }

    /// All plays in play order.
    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Clear the trick after resolution.
    pub fn clear(&mut self) {
        self.plays.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trick() {
        let trick = Trick::new();

        assert!(trick.is_empty());
        assert_eq!(trick.len(), 0);
        assert!(!trick.is_full(3));
        assert_eq!(trick.lead_suit(), None);
    }

    #[test]
    fn test_accumulate_and_fill() {
        let mut trick = Trick::new();
        trick.push(PlayerId::new(1), Card::color(0, 3));

        assert_eq!(trick.lead_suit(), Some(Suit::Color(0)));
        assert_eq!(trick.lead().unwrap().seat, PlayerId::new(1));
        assert!(!trick.is_full(3));

        trick.push(PlayerId::new(2), Card::rocket(1));
        trick.push(PlayerId::new(0), Card::color(0, 9));

        assert!(trick.is_full(3));
        assert_eq!(trick.plays().len(), 3);
        // lead suit is the first play's suit regardless of later trumps
        assert_eq!(trick.lead_suit(), Some(Suit::Color(0)));
    }

    #[test]
    fn test_clear() {
        let mut trick = Trick::new();
        trick.push(PlayerId::new(0), Card::color(1, 2));
        trick.clear();

        assert!(trick.is_empty());
        assert_eq!(trick.lead(), None);
    }
}
