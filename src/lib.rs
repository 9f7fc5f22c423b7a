//! # crew-engine
//!
//! A cooperative trick-taking card game engine optimized for RL training.
//!
//! N players jointly fulfill a set of individually-assigned
//! card-winning objectives ("tasks") before the deck is exhausted; a
//! single misplayed task ends the game immediately in a loss.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows through one seeded source
//!    at reset. Same seed + same actions = the same game, bit-for-bit,
//!    so policies can be trained and evaluated against it.
//!
//! 2. **N-Player First**: Seats are dense `PlayerId` indices; hands,
//!    counters, and tasks live in arrays indexed by seat, never in maps
//!    keyed by player name.
//!
//! 3. **Strict Legality**: Illegal plays are rejected without mutating
//!    state. Losing by task failure is a defined outcome, not an error.
//!
//! ## Architecture
//!
//! - **Engine owns the state**: one `CrewGame` per game; observers get
//!   read-only accessors. Observation encoding, action-space shapes,
//!   and rewards belong to the surrounding harness.
//!
//! - **Derived trick position**: first/last-of-trick is always computed
//!   from the open trick's length, never from a separate counter.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, reset errors
//! - `cards`: suits, cards, suit counters, the card universe
//! - `deal`: distribution, commander choice, task assignment
//! - `trick`: the open trick, rotation, legality, resolution
//! - `tasks`: task tracking and per-trick evaluation
//! - `game`: the state machine and aggregate state

pub mod cards;
pub mod core;
pub mod deal;
pub mod game;
pub mod tasks;
pub mod trick;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, GameRngState, PlayerId, PlayerMap,
};

pub use crate::cards::{Card, CardCatalog, Suit, SuitCounter, SUIT_SYMBOLS};

pub use crate::deal::{assign_tasks, deal_hands, opening_leader};

pub use crate::trick::{legal_moves, resolve, Play, Trick, TurnOrder};

pub use crate::tasks::{Task, TaskEvaluation, TaskFailure, TaskRegistry};

pub use crate::game::{
    CrewGame, GameOutcome, GameState, PlayError, PlayRecord, TurnOutcome,
};
