//! Guard predicates that gate operations on a phase.

use super::state::State;
use std::marker::PhantomData;

/// Pure predicate over a phase, paired with a description of what it requires.
///
/// Guards are checked before an operation touches any data. When one
/// fails, the caller turns [`Guard::requirement`] into an error message so
/// the refusal explains itself.
///
/// # Example
///
/// ```rust
/// use dugout::core::Guard;
/// use dugout::quiz::QuizPhase;
///
/// let in_progress = Guard::new("a quiz in progress", |p: &QuizPhase| {
///     matches!(p, QuizPhase::InProgress)
/// });
///
/// assert!(in_progress.check(&QuizPhase::InProgress));
/// assert!(!in_progress.check(&QuizPhase::Browsing));
/// assert_eq!(in_progress.requirement(), "a quiz in progress");
/// ```
pub struct Guard<S: State> {
    requirement: &'static str,
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a description and a pure predicate.
    pub fn new<F>(requirement: &'static str, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            requirement,
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows the operation from this phase.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    /// What the guard requires, phrased to follow "requires".
    pub fn requirement(&self) -> &'static str {
        self.requirement
    }
}

impl<S: State> std::fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard")
            .field("requirement", &self.requirement)
            .finish_non_exhaustive()
    }
}
