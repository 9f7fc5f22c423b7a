//! Configuration errors surfaced at reset.
//!
//! A bad configuration never produces a game: `GameConfig::validate`
//! runs before any card is generated or dealt. Rejected plays during a
//! game are a separate kind, [`crate::game::PlayError`], because they
//! are recoverable while these are not.

use thiserror::Error;

/// Fatal configuration error: the game is not created.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Cooperative trick-taking needs at least two seats.
    #[error("at least 2 players are required, got {0}")]
    TooFewPlayers(usize),

    /// Seats are dense `u8` indices.
    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(usize),

    /// Color suit count must fit the fixed suit symbol list.
    #[error("color suit count must be between 1 and {max}, got {got}")]
    ColorSuitCount { got: usize, max: usize },

    /// Every color suit needs at least one rank.
    #[error("rank count must be at least 1")]
    ZeroRanks,

    /// Tasks draw from color cards only; rockets are never task targets.
    #[error("{requested} tasks requested but only {available} task cards exist")]
    TooManyTasks { requested: usize, available: usize },

    /// Every seat must receive at least one card.
    #[error("a deck of {deck_size} cards cannot serve {players} players")]
    NotEnoughCards { deck_size: usize, players: usize },
}
