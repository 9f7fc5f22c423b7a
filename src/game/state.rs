//! Aggregate game state.
//!
//! `GameState` owns everything that changes during a game: hands, suit
//! counters, the open trick, the turn rotation, the task registry, the
//! resolved pile, and the play history. It is created at reset and
//! mutated exclusively by [`crate::game::CrewGame`]; external observers
//! get read-only accessors.
//!
//! Conservation invariant: at every point, the union of all hands, the
//! open trick, and the resolved pile is exactly the full deck, with no
//! duplicates.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, SuitCounter};
use crate::core::{GameConfig, GameRng, GameRngState, PlayerId, PlayerMap};
use crate::tasks::{Task, TaskEvaluation, TaskFailure, TaskRegistry};
use crate::trick::{Trick, TurnOrder};

/// Terminal result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Every task was fulfilled.
    Won,
    /// A task card was won by the wrong seat.
    Lost(TaskFailure),
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Won => write!(f, "all tasks completed"),
            GameOutcome::Lost(failure) => write!(f, "{}", failure),
        }
    }
}

/// One applied play, kept for replay and debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    /// The seat that played.
    pub seat: PlayerId,
    /// The card played.
    pub card: Card,
    /// 0-based index of the trick this play joined.
    pub trick: u32,
}

/// Complete state of one game.
///
/// Uses an `im` persistent vector for the play history so snapshots
/// clone cheaply.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    hands: PlayerMap<Vec<Card>>,
    suit_counts: PlayerMap<SuitCounter>,
    tasks: TaskRegistry,
    trick: Trick,
    order: TurnOrder,
    resolved: Vec<Card>,
    history: Vector<PlayRecord>,
    tricks_played: u32,
    outcome: Option<GameOutcome>,
    rng: GameRng,
}

impl GameState {
    /// Assemble the post-deal state. Suit counters are tallied from the
    /// hands and the rotation is anchored at the commander.
    pub(crate) fn new(
        config: GameConfig,
        hands: PlayerMap<Vec<Card>>,
        tasks: &[Task],
        leader: PlayerId,
        rng: GameRng,
    ) -> Self {
        let suit_counts = PlayerMap::new(config.players, |seat| SuitCounter::tally(&hands[seat]));
        let mut order = TurnOrder::new(config.players);
        order.reanchor(leader);

        Self {
            config,
            hands,
            suit_counts,
            tasks: TaskRegistry::new(tasks),
            trick: Trick::new(),
            order,
            resolved: Vec::with_capacity(config.deck_size()),
            history: Vector::new(),
            tricks_played: 0,
            outcome: None,
            rng,
        }
    }

    // === Read access ===

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A seat's current hand, sorted suit-major, rank-minor.
    #[must_use]
    pub fn hand(&self, seat: PlayerId) -> &[Card] {
        &self.hands[seat]
    }

    /// A seat's per-suit hand counts.
    #[must_use]
    pub fn suit_counter(&self, seat: PlayerId) -> &SuitCounter {
        &self.suit_counts[seat]
    }

    /// The open trick.
    #[must_use]
    pub fn current_trick(&self) -> &Trick {
        &self.trick
    }

    /// The seat currently to act.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.order.current()
    }

    /// The seat rotation, beginning at the current trick's leader.
    ///
    /// Seats leave the rotation once their hand empties; with uneven
    /// hand sizes the last tricks are played by fewer seats.
    #[must_use]
    pub fn turn_order(&self) -> &TurnOrder {
        &self.order
    }

    /// Number of seats still holding cards.
    #[must_use]
    pub fn active_players(&self) -> usize {
        self.order.len()
    }

    /// Unresolved tasks, sorted by card.
    #[must_use]
    pub fn open_tasks(&self) -> Vec<Task> {
        self.tasks.open_tasks()
    }

    /// Number of unresolved tasks.
    #[must_use]
    pub fn open_task_count(&self) -> usize {
        self.tasks.open_count()
    }

    /// Cards retired from resolved tricks.
    #[must_use]
    pub fn resolved_cards(&self) -> &[Card] {
        &self.resolved
    }

    /// Every play applied so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<PlayRecord> {
        &self.history
    }

    /// Number of resolved tricks.
    #[must_use]
    pub fn tricks_played(&self) -> u32 {
        self.tricks_played
    }

    /// The terminal result, once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// True once the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Snapshot of the RNG for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Engine-only mutation ===

    /// Move `card` from `seat`'s hand into the open trick.
    ///
    /// The caller has already validated legality.
    pub(crate) fn apply_card(&mut self, seat: PlayerId, card: Card) {
        let pos = self.hands[seat]
            .iter()
            .position(|&held| held == card)
            .expect("validated card is in hand");
        self.hands[seat].remove(pos);
        self.suit_counts[seat].remove(card.suit);
        self.trick.push(seat, card);
        self.history.push_back(PlayRecord {
            seat,
            card,
            trick: self.tricks_played,
        });
    }

    /// Advance the rotation to the next seat within the open trick.
    pub(crate) fn advance_turn(&mut self) {
        self.order.advance();
    }

    /// Evaluate the full trick against the open tasks.
    pub(crate) fn evaluate_tasks(&mut self, winner: PlayerId) -> TaskEvaluation {
        self.tasks.evaluate(&self.trick, winner)
    }

    /// Retire the full trick's cards and count the trick as played.
    pub(crate) fn collect_trick(&mut self) {
        self.resolved
            .extend(self.trick.plays().iter().map(|play| play.card));
        self.trick.clear();
        self.tricks_played += 1;
    }

    /// The seat to lead the next trick: the winner if it still holds
    /// cards, otherwise the first active seat after it in rotation.
    pub(crate) fn next_leader_from(&self, winner: PlayerId) -> PlayerId {
        let seats = self.order.seats();
        let start = seats
            .iter()
            .position(|&seat| seat == winner)
            .expect("winner is in the rotation");
        (0..seats.len())
            .map(|i| seats[(start + i) % seats.len()])
            .find(|&seat| !self.hands[seat].is_empty())
            .expect("cards remain while tasks are open")
    }

    /// Drop seats whose hands have emptied from the rotation.
    pub(crate) fn retire_empty_hands(&mut self) {
        let hands = &self.hands;
        self.order.retain(|seat| !hands[seat].is_empty());
    }

    /// Re-anchor the rotation at the trick winner.
    pub(crate) fn reanchor(&mut self, winner: PlayerId) {
        self.order.reanchor(winner);
    }

    /// Record the terminal result.
    pub(crate) fn set_outcome(&mut self, outcome: GameOutcome) {
        debug_assert!(self.outcome.is_none(), "outcome set twice");
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn small_state() -> GameState {
        let config = GameConfig::new(2)
            .with_color_suits(1)
            .with_ranks(4)
            .with_rockets(0)
            .with_tasks(1);

        let mut hands: PlayerMap<Vec<Card>> = PlayerMap::with_default(2);
        hands[PlayerId::new(0)] = vec![Card::color(0, 1), Card::color(0, 3)];
        hands[PlayerId::new(1)] = vec![Card::color(0, 2), Card::color(0, 4)];

        let tasks = [Task {
            card: Card::color(0, 3),
            owner: PlayerId::new(0),
        }];

        GameState::new(config, hands, &tasks, PlayerId::new(1), GameRng::new(0))
    }

    #[test]
    fn test_initial_state() {
        let state = small_state();

        assert_eq!(state.current_player(), PlayerId::new(1));
        assert_eq!(state.open_task_count(), 1);
        assert_eq!(state.tricks_played(), 0);
        assert!(state.current_trick().is_empty());
        assert!(state.resolved_cards().is_empty());
        assert!(!state.is_terminal());
        assert_eq!(state.suit_counter(PlayerId::new(0)).count(Suit::Color(0)), 2);
    }

    #[test]
    fn test_apply_card_moves_hand_to_trick() {
        let mut state = small_state();

        state.apply_card(PlayerId::new(1), Card::color(0, 2));

        assert_eq!(state.hand(PlayerId::new(1)), &[Card::color(0, 4)]);
        assert_eq!(state.suit_counter(PlayerId::new(1)).count(Suit::Color(0)), 1);
        assert_eq!(state.current_trick().len(), 1);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].trick, 0);
    }

    #[test]
    fn test_collect_trick_retires_cards() {
        let mut state = small_state();
        state.apply_card(PlayerId::new(1), Card::color(0, 2));
        state.apply_card(PlayerId::new(0), Card::color(0, 1));

        state.collect_trick();

        assert!(state.current_trick().is_empty());
        assert_eq!(state.resolved_cards().len(), 2);
        assert_eq!(state.tricks_played(), 1);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(format!("{}", GameOutcome::Won), "all tasks completed");

        let lost = GameOutcome::Lost(TaskFailure {
            card: Card::color(0, 3),
            owner: PlayerId::new(0),
            winner: PlayerId::new(1),
        });
        assert_eq!(
            format!("{}", lost),
            "Player 0 is unable to fulfill the task B3: the trick went to Player 1"
        );
    }
}
