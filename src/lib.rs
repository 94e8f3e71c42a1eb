//! Dugout: the pure state machines behind a baseball rules trainer
//!
//! The crate holds the logic a learning app needs and leaves rendering to
//! its host. Each machine is an explicit value owned by the caller; every
//! event returns the new state together with the view-model to draw.
//!
//! # Modules
//!
//! - [`count`]: interactive balls/strikes/outs tracker with status messages
//! - [`quiz`]: quiz catalog, session state machine, scoring and grading
//! - [`content`]: daily tips, drills and history moments
//! - [`core`]: the `State` trait, `Guard` predicates and `StateHistory`
//!   shared by the machines
//!
//! # Example
//!
//! ```rust
//! use dugout::count::CountTracker;
//! use dugout::quiz::{QuizId, QuizPhase, QuizSession};
//!
//! let mut tracker = CountTracker::new();
//! let update = tracker.ball();
//! assert_eq!(update.message, "Ball 1. 3 more for a walk.");
//!
//! let mut session = QuizSession::with_builtin_catalog();
//! let snapshot = session.select_quiz(QuizId(1)).unwrap();
//! assert_eq!(snapshot.phase, QuizPhase::InProgress);
//! assert_eq!(snapshot.question.unwrap().progress(), "Question 1 of 3");
//! ```

pub mod content;
pub mod core;
pub mod count;
mod macros;
pub mod quiz;

// Re-export commonly used types
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use count::{CountEvent, CountState, CountTracker, CountUpdate};
pub use quiz::{Catalog, QuizError, QuizPhase, QuizSession, SessionSnapshot};
