//! Interactive count tracker.
//!
//! Models how the count moves during an at-bat: balls walk the batter,
//! strikes retire them, and outs end the half-inning. Every transition is a
//! pure function of `(rules, state, event)` returning the settled count and
//! a status message; [`CountTracker`] holds one count for a view.
//!
//! # Example
//!
//! ```rust
//! use dugout::count::CountTracker;
//!
//! let mut tracker = CountTracker::new();
//! tracker.strike();
//! tracker.strike();
//! let update = tracker.strike();
//!
//! assert_eq!(update.state.outs, 1);
//! assert_eq!(update.state.strikes, 0);
//! assert_eq!(update.message, "Strike three! That's an out. Resetting the count.");
//! ```

mod rules;
mod tracker;

pub use rules::{CountRules, RulesError};
pub use tracker::{apply, CountEvent, CountState, CountTracker, CountUpdate, INITIAL_MESSAGE};
