//! Follow-suit legality.
//!
//! A pure function of the hand, its suit counter, and the open trick.
//! Re-derived on every query; never cached across plays.

use crate::cards::{Card, SuitCounter};

use super::trick::Trick;

/// The subset of `hand` that may legally be played into `trick`.
///
/// - Leading (empty trick): the whole hand.
/// - Following while holding the led suit: exactly the cards of that
///   suit — a held rocket is not a substitute for following.
/// - Void in the led suit: the whole hand (discard, trump, anything).
///
/// ```
/// use crew_engine::cards::{Card, SuitCounter};
/// use crew_engine::core::PlayerId;
/// use crew_engine::trick::{legal_moves, Trick};
///
/// let hand = [Card::color(0, 2), Card::color(1, 7), Card::rocket(1)];
/// let counter = SuitCounter::tally(&hand);
///
/// let mut trick = Trick::new();
/// trick.push(PlayerId::new(0), Card::color(0, 5));
///
/// // Holding B2, the follower must play it; the rocket stays in hand.
/// assert_eq!(legal_moves(&hand, &counter, &trick), vec![Card::color(0, 2)]);
/// ```
#[must_use]
pub fn legal_moves(hand: &[Card], counter: &SuitCounter, trick: &Trick) -> Vec<Card> {
    match trick.lead_suit() {
        Some(lead) if !counter.is_void(lead) => hand
            .iter()
            .copied()
            .filter(|card| card.suit == lead)
            .collect(),
        _ => hand.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::core::PlayerId;

    fn hand_and_counter() -> (Vec<Card>, SuitCounter) {
        let hand = vec![
            Card::color(0, 1),
            Card::color(0, 4),
            Card::color(1, 2),
            Card::rocket(3),
        ];
        let counter = SuitCounter::tally(&hand);
        (hand, counter)
    }

    #[test]
    fn test_leader_may_play_anything() {
        let (hand, counter) = hand_and_counter();
        let trick = Trick::new();

        assert_eq!(legal_moves(&hand, &counter, &trick), hand);
    }

    #[test]
    fn test_must_follow_lead_suit() {
        let (hand, counter) = hand_and_counter();
        let mut trick = Trick::new();
        trick.push(PlayerId::new(2), Card::color(0, 9));

        let legal = legal_moves(&hand, &counter, &trick);
        assert_eq!(legal, vec![Card::color(0, 1), Card::color(0, 4)]);
    }

    #[test]
    fn test_rocket_is_not_a_substitute_for_following() {
        let (hand, counter) = hand_and_counter();
        let mut trick = Trick::new();
        trick.push(PlayerId::new(2), Card::color(1, 5));

        // Holds P2, so only P2 is legal even though a rocket is in hand.
        assert_eq!(legal_moves(&hand, &counter, &trick), vec![Card::color(1, 2)]);
    }

    #[test]
    fn test_void_in_lead_suit_frees_the_hand() {
        let (hand, counter) = hand_and_counter();
        let mut trick = Trick::new();
        trick.push(PlayerId::new(2), Card::color(2, 5));

        assert!(counter.is_void(Suit::Color(2)));
        assert_eq!(legal_moves(&hand, &counter, &trick), hand);
    }

    #[test]
    fn test_rocket_lead_must_be_followed_by_rocket_holders() {
        let (hand, counter) = hand_and_counter();
        let mut trick = Trick::new();
        trick.push(PlayerId::new(2), Card::rocket(4));

        assert_eq!(legal_moves(&hand, &counter, &trick), vec![Card::rocket(3)]);
    }
}
