//! Dealing: card distribution, commander determination, task assignment.

pub mod dealer;

pub use dealer::{assign_tasks, deal_hands, opening_leader};
