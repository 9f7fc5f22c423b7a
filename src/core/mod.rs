//! Core engine types: seats, RNG, configuration, reset errors.
//!
//! These are the building blocks everything else sits on. Nothing in
//! here knows about tricks or tasks; the card universe is configured
//! through [`GameConfig`] and interpreted by the modules above.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use error::ConfigError;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
