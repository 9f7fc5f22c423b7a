//! Task assignment and fulfillment tracking.
//!
//! A task is a standing obligation that a specific card be won by a
//! specific seat. Ownership is logical, not physical: the card may sit
//! in any hand. A task resolves only when its card is played into a
//! trick — fulfilled if the trick's winner is the owner, fatal to the
//! game otherwise.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::trick::Trick;

/// An obligation: `card` must be won by `owner`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// The card that must be won. Never a rocket.
    pub card: Card,
    /// The seat that must win it.
    pub owner: PlayerId,
}

/// Diagnostics for a failed task: the designed losing condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFailure {
    /// The task card that went astray.
    pub card: Card,
    /// The seat that was obliged to win it.
    pub owner: PlayerId,
    /// The seat that actually won the trick.
    pub winner: PlayerId,
}

impl std::fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is unable to fulfill the task {}: the trick went to {}",
            self.owner, self.card, self.winner
        )
    }
}

/// Result of evaluating one resolved trick against the open tasks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskEvaluation {
    /// Tasks fulfilled by this trick, in play order.
    pub completed: Vec<Task>,
    /// The first mismatch found in play order, if any. Evaluation stops
    /// at the first failure; later task cards in the trick are not
    /// examined.
    pub failure: Option<TaskFailure>,
    /// True when no failure occurred and no task remains open.
    pub all_complete: bool,
}

/// The open-task index: task card to owning seat.
///
/// Each card value maps to at most one task.
#[derive(Clone, Debug, Default)]
pub struct TaskRegistry {
    open: FxHashMap<Card, PlayerId>,
}

impl TaskRegistry {
    /// Build the registry from the dealt assignments.
    #[must_use]
    pub fn new(tasks: &[Task]) -> Self {
        let mut open = FxHashMap::default();
        for task in tasks {
            let previous = open.insert(task.card, task.owner);
            debug_assert!(previous.is_none(), "duplicate task card {}", task.card);
        }
        Self { open }
    }

    /// Number of unresolved tasks.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// The owner of an open task on `card`, if one exists.
    #[must_use]
    pub fn owner(&self, card: Card) -> Option<PlayerId> {
        self.open.get(&card).copied()
    }

    /// All open tasks, sorted by card for deterministic iteration.
    #[must_use]
    pub fn open_tasks(&self) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .open
            .iter()
            .map(|(&card, &owner)| Task { card, owner })
            .collect();
        tasks.sort_by_key(|task| task.card);
        tasks
    }

    /// Evaluate a resolved trick.
    ///
    /// Task cards in the trick are examined in play order. A card whose
    /// owner matches `winner` closes its task; the first mismatch aborts
    /// evaluation and is reported as the failure. Tasks completed before
    /// the failure stay completed.
    pub fn evaluate(&mut self, trick: &Trick, winner: PlayerId) -> TaskEvaluation {
        let mut completed = Vec::new();
        let mut failure = None;

        for play in trick.plays() {
            let Some(owner) = self.owner(play.card) else {
                continue;
            };
            if owner == winner {
                self.open.remove(&play.card);
                completed.push(Task {
                    card: play.card,
                    owner,
                });
            } else {
                failure = Some(TaskFailure {
                    card: play.card,
                    owner,
                    winner,
                });
                break;
            }
        }

        TaskEvaluation {
            all_complete: failure.is_none() && self.open.is_empty(),
            completed,
            failure,
        }
    }
}
