//! Seat rotation: whose turn it is, and re-anchoring after a trick.
//!
//! The rotation never tracks trick position itself — first/last-of-trick
//! is always derived from the number of plays recorded in the open
//! [`crate::trick::Trick`], so the two can not drift apart.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A rotation of seat identifiers with a cursor on the seat to act.
///
/// ```
/// use crew_engine::core::PlayerId;
/// use crew_engine::trick::TurnOrder;
///
/// let mut order = TurnOrder::new(4);
/// order.reanchor(PlayerId::new(2));
/// assert_eq!(order.current(), PlayerId::new(2));
///
/// order.advance();
/// assert_eq!(order.current(), PlayerId::new(3));
/// order.advance();
/// assert_eq!(order.current(), PlayerId::new(0)); // wraps, relative order kept
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOrder {
    seats: Vec<PlayerId>,
    cursor: usize,
}

impl TurnOrder {
    /// Create the natural order `0..player_count` starting at seat 0.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        Self {
            seats: PlayerId::all(player_count).collect(),
            cursor: 0,
        }
    }

    /// The seat currently to act.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.seats[self.cursor]
    }

    /// Advance to the following seat, wrapping at the end.
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.seats.len();
    }

    /// Rewrite the rotation to begin at `start`, preserving the relative
    /// order of the rest, and reset the cursor to `start`.
    ///
    /// Used once at reset with the commander and after every resolved
    /// trick with its winner.
    pub fn reanchor(&mut self, start: PlayerId) {
        let pos = self
            .seats
            .iter()
            .position(|&seat| seat == start)
            .expect("seat is part of the rotation");
        self.seats.rotate_left(pos);
        self.cursor = 0;
    }

    /// Number of seats still in the rotation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// True when no seat remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Drop seats from the rotation, preserving relative order.
    ///
    /// Used when hands empty: a seat that can no longer play leaves the
    /// rotation. The cursor resets to the anchor; callers re-anchor
    /// afterwards.
    pub fn retain(&mut self, mut keep: impl FnMut(PlayerId) -> bool) {
        self.seats.retain(|&seat| keep(seat));
        self.cursor = 0;
    }

    /// The rotation, beginning at its anchor seat.
    #[must_use]
    pub fn seats(&self) -> &[PlayerId] {
        &self.seats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat_ids(order: &TurnOrder) -> Vec<u8> {
        order.seats().iter().map(|seat| seat.0).collect()
    }

    #[test]
    fn test_natural_order() {
        let order = TurnOrder::new(4);
        assert_eq!(seat_ids(&order), [0, 1, 2, 3]);
        assert_eq!(order.current(), PlayerId::new(0));
    }

    #[test]
    fn test_advance_wraps() {
        let mut order = TurnOrder::new(3);

        order.advance();
        assert_eq!(order.current(), PlayerId::new(1));
        order.advance();
        assert_eq!(order.current(), PlayerId::new(2));
        order.advance();
        assert_eq!(order.current(), PlayerId::new(0));
    }

    #[test]
    fn test_reanchor_preserves_relative_order() {
        let mut order = TurnOrder::new(4);
        order.reanchor(PlayerId::new(2));

        assert_eq!(seat_ids(&order), [2, 3, 0, 1]);
        assert_eq!(order.current(), PlayerId::new(2));
    }

    #[test]
    fn test_reanchor_resets_cursor() {
        let mut order = TurnOrder::new(3);
        order.advance();
        order.advance();

        order.reanchor(PlayerId::new(1));
        assert_eq!(order.current(), PlayerId::new(1));
        order.advance();
        assert_eq!(order.current(), PlayerId::new(2));
    }

    #[test]
    fn test_reanchor_twice() {
        let mut order = TurnOrder::new(4);
        order.reanchor(PlayerId::new(3));
        order.reanchor(PlayerId::new(1));

        assert_eq!(seat_ids(&order), [1, 2, 3, 0]);
    }

    #[test]
    fn test_retain_drops_seats_in_order() {
        let mut order = TurnOrder::new(4);
        order.reanchor(PlayerId::new(2));

        order.retain(|seat| seat.index() % 2 == 0);

        assert_eq!(seat_ids(&order), [2, 0]);
        assert_eq!(order.len(), 2);

        order.reanchor(PlayerId::new(0));
        assert_eq!(order.current(), PlayerId::new(0));
        order.advance();
        assert_eq!(order.current(), PlayerId::new(2));
    }
}
