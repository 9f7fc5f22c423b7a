//! The game orchestrator and its aggregate state.
//!
//! ## Key Types
//!
//! - `CrewGame`: the state machine driving one game
//! - `GameState`: hands, counters, trick, rotation, tasks, history
//! - `TurnOutcome`: what one applied play did
//! - `PlayError`: recoverable play rejection
//! - `GameOutcome`: terminal diagnostics

pub mod engine;
pub mod state;

pub use engine::{CrewGame, PlayError, TurnOutcome};
pub use state::{GameOutcome, GameState, PlayRecord};
