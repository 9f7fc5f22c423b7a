//! Trick resolution under the strict-trump rule.
//!
//! The first rocket played wins the trick over any color card; later
//! rockets must out-rank the best rocket. While no rocket has been
//! played, only cards of the led suit compete, by rank. Ranks are
//! unique within a suit by construction, so ties can not occur.

use crate::cards::Suit;

use super::trick::{Play, Trick};

/// Resolve a completed trick to its winning play.
///
/// Walks the plays in play order, tracking the current best. A rocket
/// entering a rocket-free trick takes the lead regardless of rank and
/// switches the comparison suit to trump for the rest of the trick.
/// When the lead card itself is a rocket, trump comparison is active
/// from the first play.
///
/// # Panics
///
/// Panics on an empty trick; the engine only resolves full tricks.
#[must_use]
pub fn resolve(trick: &Trick) -> Play {
    let plays = trick.plays();
    assert!(!plays.is_empty(), "cannot resolve an empty trick");

    let lead = plays[0];
    let lead_suit = lead.card.suit;
    let mut best = lead;
    let mut trump_active = lead_suit.is_rocket();

    for &play in &plays[1..] {
        let suit = play.card.suit;
        if !trump_active && suit == Suit::Rocket {
            // First rocket beats any color card regardless of rank.
            trump_active = true;
            best = play;
        } else if trump_active && suit == Suit::Rocket && play.card.rank > best.card.rank {
            best = play;
        } else if !trump_active && suit == lead_suit && play.card.rank > best.card.rank {
            best = play;
        }
    }

    best
}
