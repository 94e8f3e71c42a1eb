//! Core state machine types shared by the count tracker and the quiz flow.
//!
//! - Phase definitions via the `State` trait
//! - Guard predicates for operation preconditions
//! - Immutable history of phase changes
//!
//! Everything here is pure; the domain modules own the mutable state.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
