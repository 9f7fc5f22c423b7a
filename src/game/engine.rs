//! The game state machine.
//!
//! `CrewGame` orchestrates one full game: it validates and applies
//! plays, resolves tricks when they fill, evaluates tasks, re-anchors
//! the rotation to each trick's winner, and decides termination. One
//! instance owns one game; batched simulation uses independent
//! instances.
//!
//! ## Reproducibility
//!
//! Reset draws from the seeded RNG in a fixed order — deck shuffle,
//! commander fallback (rocketless games only), task shuffle — so the
//! same seed, configuration, and action sequence reproduce the same
//! game bit-for-bit.

use log::{debug, trace};
use thiserror::Error;

use crate::cards::{Card, CardCatalog, Suit};
use crate::core::{ConfigError, GameConfig, GameRng, PlayerId};
use crate::deal::{assign_tasks, deal_hands, opening_leader};
use crate::tasks::{Task, TaskFailure};
use crate::trick::{legal_moves, resolve};

use super::state::{GameOutcome, GameState};

/// What one applied play did to the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The trick is still open; the next seat is to act.
    Continued,
    /// The trick filled and resolved; `winner` leads the next one.
    TrickResolved {
        /// Winner of the resolved trick.
        winner: PlayerId,
        /// Tasks fulfilled by the trick, in play order.
        completed: Vec<Task>,
    },
    /// The final open task was fulfilled: the crew wins.
    Won {
        /// Winner of the final trick.
        winner: PlayerId,
        /// Tasks fulfilled by the final trick, in play order.
        completed: Vec<Task>,
    },
    /// A task card went to the wrong seat: the crew loses immediately.
    Lost(TaskFailure),
}

/// A rejected play. State is unchanged; the caller may retry with a
/// legal card.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game has already ended; re-reports the terminal outcome.
    #[error("the game is over: {outcome}")]
    GameOver {
        /// The standing terminal result.
        outcome: GameOutcome,
    },

    /// Another seat is to act.
    #[error("it is {current}'s turn, not {seat}'s")]
    OutOfTurn { seat: PlayerId, current: PlayerId },

    /// The acting seat does not hold the card.
    #[error("{seat} does not hold {card}")]
    CardNotHeld { seat: PlayerId, card: Card },

    /// The card violates the follow-suit rule.
    #[error("{card} does not follow the led suit {lead}")]
    MustFollowSuit { card: Card, lead: Suit },
}

/// One game of cooperative trick-taking.
///
/// ```
/// use crew_engine::core::GameConfig;
/// use crew_engine::game::CrewGame;
///
/// let mut game = CrewGame::new(GameConfig::default(), 42).unwrap();
///
/// // Drive with any policy; here, always the first legal card.
/// while !game.is_terminal() {
///     let seat = game.current_player();
///     let card = game.legal_moves()[0];
///     game.apply_play(seat, card).unwrap();
/// }
/// assert!(game.state().outcome().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct CrewGame {
    state: GameState,
}

impl CrewGame {
    /// Reset: validate the configuration, generate the card universe,
    /// deal, pick the commander, and assign tasks.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let catalog = CardCatalog::generate(&config);
        let mut rng = GameRng::new(seed);

        let hands = deal_hands(catalog.playing_cards(), config.players, &mut rng);
        let leader = opening_leader(&hands, config.rockets, &mut rng);
        let tasks = assign_tasks(
            catalog.task_cards(),
            config.tasks,
            leader,
            config.players,
            &mut rng,
        );
        debug!("{} commands the first trick", leader);

        Ok(Self {
            state: GameState::new(config, hands, &tasks, leader, rng),
        })
    }

    /// Read-only view of the full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.state.config()
    }

    /// The seat currently to act.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    /// True once the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// The terminal result, once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.state.outcome()
    }

    /// Legal cards for the seat currently to act.
    ///
    /// Re-derived from the hand, its suit counter, and the open trick on
    /// every call. Empty once the game is terminal.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Card> {
        if self.state.is_terminal() {
            return Vec::new();
        }
        let seat = self.state.current_player();
        legal_moves(
            self.state.hand(seat),
            self.state.suit_counter(seat),
            self.state.current_trick(),
        )
    }

    /// Apply one play for `seat`.
    ///
    /// Rejects out-of-turn, unheld, and follow-suit-violating cards
    /// without changing state. When the play fills the trick, resolves
    /// it, evaluates tasks, and either continues with the winner
    /// leading or terminates the game.
    pub fn apply_play(&mut self, seat: PlayerId, card: Card) -> Result<TurnOutcome, PlayError> {
        if let Some(outcome) = self.state.outcome() {
            return Err(PlayError::GameOver {
                outcome: *outcome,
            });
        }

        let current = self.state.current_player();
        if seat != current {
            return Err(PlayError::OutOfTurn { seat, current });
        }
        if !self.state.hand(seat).contains(&card) {
            return Err(PlayError::CardNotHeld { seat, card });
        }
        let legal = legal_moves(
            self.state.hand(seat),
            self.state.suit_counter(seat),
            self.state.current_trick(),
        );
        if !legal.contains(&card) {
            let lead = self
                .state
                .current_trick()
                .lead_suit()
                .expect("a held card is only illegal when following");
            return Err(PlayError::MustFollowSuit { card, lead });
        }

        trace!("{} plays {}", seat, card);
        self.state.apply_card(seat, card);

        if !self.state.current_trick().is_full(self.state.active_players()) {
            self.state.advance_turn();
            return Ok(TurnOutcome::Continued);
        }

        // The trick is full: resolve, evaluate tasks, retire the cards.
        let winning = resolve(self.state.current_trick());
        let evaluation = self.state.evaluate_tasks(winning.seat);
        self.state.collect_trick();
        debug!(
            "trick {} goes to {} with {}",
            self.state.tricks_played(),
            winning.seat,
            winning.card
        );

        if let Some(failure) = evaluation.failure {
            debug!("{}", failure);
            self.state.set_outcome(GameOutcome::Lost(failure));
            return Ok(TurnOutcome::Lost(failure));
        }

        if evaluation.all_complete {
            debug!("all tasks completed");
            self.state.set_outcome(GameOutcome::Won);
            return Ok(TurnOutcome::Won {
                winner: winning.seat,
                completed: evaluation.completed,
            });
        }

        // Seats that played their final card leave the rotation; the
        // winner leads next, or the first still-active seat after it.
        let leader = self.state.next_leader_from(winning.seat);
        self.state.retire_empty_hands();
        self.state.reanchor(leader);
        Ok(TurnOutcome::TrickResolved {
            winner: winning.seat,
            completed: evaluation.completed,
        })
    }
}
