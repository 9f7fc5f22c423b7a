//! Task system: assignment tracking and per-trick evaluation.

pub mod registry;

pub use registry::{Task, TaskEvaluation, TaskFailure, TaskRegistry};
