//! Phase transition history.
//!
//! A quiz session records every phase change it makes, so a view can show
//! how long a run took or replay the path through the quiz list.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The phase being left
    pub from: S,
    /// The phase being entered
    pub to: S,
    /// The operation that caused the change, e.g. `"select_quiz"`
    pub event: String,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Build a transition stamped with the current time.
    pub fn now(from: S, to: S, event: impl Into<String>) -> Self {
        Self {
            from,
            to,
            event: event.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of phase changes.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use dugout::core::{StateHistory, StateTransition};
/// use dugout::quiz::QuizPhase;
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(
///         QuizPhase::Browsing,
///         QuizPhase::InProgress,
///         "select_quiz",
///     ))
///     .record(StateTransition::now(
///         QuizPhase::InProgress,
///         QuizPhase::Completed,
///         "advance",
///     ));
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2], &QuizPhase::Completed);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Phases traversed: the first `from`, then every `to` in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// All transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
