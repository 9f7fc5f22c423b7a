//! Game configuration.
//!
//! A `GameConfig` fully determines the card universe and table size.
//! Defaults match the full game: 4 color suits ranked 1-9, 4 rockets,
//! 3 players, 3 tasks. Validation runs at reset and rejects
//! configurations that could not produce a playable game.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::SUIT_SYMBOLS;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use crew_engine::core::GameConfig;
///
/// // The minimal end-to-end setup: one suit of three cards, one task.
/// let config = GameConfig::new(3)
///     .with_color_suits(1)
///     .with_ranks(3)
///     .with_rockets(0)
///     .with_tasks(1);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.deck_size(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of color suits (1-4, drawn from the fixed symbol list).
    pub color_suits: usize,

    /// Ranks per color suit (cards run 1..=ranks).
    pub ranks: u8,

    /// Number of rocket (trump) cards, ranked 1..=rockets.
    pub rockets: u8,

    /// Number of seats at the table.
    pub players: usize,

    /// Number of task cards assigned at the deal.
    pub tasks: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            color_suits: 4,
            ranks: 9,
            rockets: 4,
            players: 3,
            tasks: 3,
        }
    }
}

impl GameConfig {
    /// Create a configuration for `players` seats with default cards.
    #[must_use]
    pub fn new(players: usize) -> Self {
        Self {
            players,
            ..Self::default()
        }
    }

    /// Set the number of color suits.
    #[must_use]
    pub fn with_color_suits(mut self, color_suits: usize) -> Self {
        self.color_suits = color_suits;
        self
    }

    /// Set the ranks per color suit.
    #[must_use]
    pub fn with_ranks(mut self, ranks: u8) -> Self {
        self.ranks = ranks;
        self
    }

    /// Set the number of rocket cards.
    #[must_use]
    pub fn with_rockets(mut self, rockets: u8) -> Self {
        self.rockets = rockets;
        self
    }

    /// Set the number of tasks.
    #[must_use]
    pub fn with_tasks(mut self, tasks: usize) -> Self {
        self.tasks = tasks;
        self
    }

    /// Total cards in the deck: `color_suits * ranks + rockets`.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.color_suits * self.ranks as usize + self.rockets as usize
    }

    /// Cards eligible as task targets (all color cards).
    #[must_use]
    pub fn task_card_count(&self) -> usize {
        self.color_suits * self.ranks as usize
    }

    /// Validate the configuration.
    ///
    /// Runs before any card is generated; a failing configuration never
    /// produces a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players < 2 {
            return Err(ConfigError::TooFewPlayers(self.players));
        }
        if self.players > 255 {
            return Err(ConfigError::TooManyPlayers(self.players));
        }
        if self.color_suits == 0 || self.color_suits > SUIT_SYMBOLS.len() {
            return Err(ConfigError::ColorSuitCount {
                got: self.color_suits,
                max: SUIT_SYMBOLS.len(),
            });
        }
        if self.ranks == 0 {
            return Err(ConfigError::ZeroRanks);
        }
        if self.tasks > self.task_card_count() {
            return Err(ConfigError::TooManyTasks {
                requested: self.tasks,
                available: self.task_card_count(),
            });
        }
        if self.deck_size() < self.players {
            return Err(ConfigError::NotEnoughCards {
                deck_size: self.deck_size(),
                players: self.players,
            });
        }
        Ok(())
    }
}
