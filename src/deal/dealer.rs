//! Dealing: shuffle, distribution, commander choice, task assignment.
//!
//! All three operations draw from the single seeded [`GameRng`] in a
//! fixed order (deck shuffle, commander fallback, task shuffle), which
//! makes the entire deal a pure function of configuration and seed.

use log::debug;

use crate::cards::Card;
use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::tasks::Task;

/// Shuffle `cards` and deal them round-robin, one at a time, seat 0
/// first.
///
/// With totals not divisible by the seat count, earlier seats receive
/// the extra cards, so hand sizes differ by at most one. Hands are
/// sorted suit-major, rank-minor after the deal.
#[must_use]
pub fn deal_hands(cards: &[Card], player_count: usize, rng: &mut GameRng) -> PlayerMap<Vec<Card>> {
    let mut deck = cards.to_vec();
    rng.shuffle(&mut deck);

    let mut hands: PlayerMap<Vec<Card>> = PlayerMap::with_default(player_count);
    for (i, card) in deck.into_iter().enumerate() {
        hands[PlayerId::new((i % player_count) as u8)].push(card);
    }
    for (_, hand) in hands.iter_mut() {
        hand.sort();
    }

    debug!("dealt {} cards across {} seats", cards.len(), player_count);
    hands
}

/// Determine the commander: the seat that leads the first trick.
///
/// With rockets in play this is the holder of the highest rocket, which
/// is unique and always dealt. Without rockets a uniformly random seat
/// is drawn from the seeded source.
#[must_use]
pub fn opening_leader(
    hands: &PlayerMap<Vec<Card>>,
    rockets: u8,
    rng: &mut GameRng,
) -> PlayerId {
    if rockets == 0 {
        let seats: Vec<PlayerId> = hands.player_ids().collect();
        return *rng.choose(&seats).expect("at least one seat");
    }

    let highest = Card::rocket(rockets);
    hands
        .iter()
        .find(|(_, hand)| hand.contains(&highest))
        .map(|(seat, _)| seat)
        .expect("the highest rocket is always dealt")
}

/// Shuffle the eligible task cards and assign the first `task_count`
/// round-robin, starting from the commander.
///
/// A seat may end up with zero, one, or several tasks. The caller has
/// already validated that `task_count` does not exceed the eligible
/// cards.
#[must_use]
pub fn assign_tasks(
    task_cards: &[Card],
    task_count: usize,
    leader: PlayerId,
    player_count: usize,
    rng: &mut GameRng,
) -> Vec<Task> {
    let mut pool = task_cards.to_vec();
    rng.shuffle(&mut pool);

    pool.into_iter()
        .take(task_count)
        .enumerate()
        .map(|(i, card)| Task {
            card,
            owner: PlayerId::new(((leader.index() + i) % player_count) as u8),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCatalog;
    use crate::core::GameConfig;
    use std::collections::HashSet;

    fn full_deal(seed: u64) -> (GameConfig, PlayerMap<Vec<Card>>) {
        let config = GameConfig::default();
        let catalog = CardCatalog::generate(&config);
        let mut rng = GameRng::new(seed);
        let hands = deal_hands(catalog.playing_cards(), config.players, &mut rng);
        (config, hands)
    }

    #[test]
    fn test_deal_partitions_the_deck() {
        let (config, hands) = full_deal(42);

        let mut dealt: Vec<Card> = hands.iter().flat_map(|(_, h)| h.iter().copied()).collect();
        assert_eq!(dealt.len(), config.deck_size());

        let unique: HashSet<_> = dealt.iter().copied().collect();
        assert_eq!(unique.len(), dealt.len());

        dealt.sort();
        let mut expected = CardCatalog::generate(&config).playing_cards().to_vec();
        expected.sort();
        assert_eq!(dealt, expected);
    }

    #[test]
    fn test_hand_sizes_differ_by_at_most_one() {
        // 40 cards over 3 seats: 14, 13, 13 — extras to the earlier seats.
        let (_, hands) = full_deal(42);

        assert_eq!(hands[PlayerId::new(0)].len(), 14);
        assert_eq!(hands[PlayerId::new(1)].len(), 13);
        assert_eq!(hands[PlayerId::new(2)].len(), 13);
    }

    #[test]
    fn test_hands_are_sorted() {
        let (_, hands) = full_deal(7);

        for (_, hand) in hands.iter() {
            let mut sorted = hand.clone();
            sorted.sort();
            assert_eq!(*hand, sorted);
        }
    }

    #[test]
    fn test_deal_is_deterministic() {
        let (_, hands1) = full_deal(123);
        let (_, hands2) = full_deal(123);
        assert_eq!(hands1, hands2);

        let (_, other) = full_deal(124);
        assert_ne!(hands1, other);
    }

    #[test]
    fn test_commander_holds_highest_rocket() {
        let (config, hands) = full_deal(42);
        let mut rng = GameRng::new(99);

        let leader = opening_leader(&hands, config.rockets, &mut rng);
        assert!(hands[leader].contains(&Card::rocket(config.rockets)));
    }

    #[test]
    fn test_commander_random_without_rockets() {
        let config = GameConfig::new(4).with_rockets(0);
        let catalog = CardCatalog::generate(&config);

        let mut rng1 = GameRng::new(5);
        let hands1 = deal_hands(catalog.playing_cards(), config.players, &mut rng1);
        let leader1 = opening_leader(&hands1, 0, &mut rng1);

        let mut rng2 = GameRng::new(5);
        let hands2 = deal_hands(catalog.playing_cards(), config.players, &mut rng2);
        let leader2 = opening_leader(&hands2, 0, &mut rng2);

        // Same seed, same draw sequence, same commander.
        assert_eq!(leader1, leader2);
        assert!(leader1.index() < config.players);
    }

    #[test]
    fn test_tasks_round_robin_from_commander() {
        let config = GameConfig::default();
        let catalog = CardCatalog::generate(&config);
        let mut rng = GameRng::new(42);

        let leader = PlayerId::new(2);
        let tasks = assign_tasks(catalog.task_cards(), 4, leader, config.players, &mut rng);

        assert_eq!(tasks.len(), 4);
        assert_eq!(tasks[0].owner, PlayerId::new(2));
        assert_eq!(tasks[1].owner, PlayerId::new(0));
        assert_eq!(tasks[2].owner, PlayerId::new(1));
        // Wraps back around: the commander may hold several tasks.
        assert_eq!(tasks[3].owner, PlayerId::new(2));
    }

    #[test]
    fn test_task_cards_are_distinct() {
        let config = GameConfig::default();
        let catalog = CardCatalog::generate(&config);
        let mut rng = GameRng::new(42);

        let tasks = assign_tasks(
            catalog.task_cards(),
            10,
            PlayerId::new(0),
            config.players,
            &mut rng,
        );

        let unique: HashSet<_> = tasks.iter().map(|t| t.card).collect();
        assert_eq!(unique.len(), tasks.len());
        assert!(tasks.iter().all(|t| !t.card.is_rocket()));
    }
}
