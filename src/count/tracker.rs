//! Balls, strikes and outs for a simulated at-bat.

use crate::count::rules::{capitalize, cardinal, ordinal, CountRules, RulesError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Status text shown before any event and after a reset.
pub const INITIAL_MESSAGE: &str =
    "Tap the buttons to simulate what happens to the count during an at-bat.";

/// The count triple. Always settled when observed: `balls < balls_for_walk`,
/// `strikes < strikes_for_out`, `outs < outs_per_inning`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountState {
    pub balls: u8,
    pub strikes: u8,
    pub outs: u8,
}

impl CountState {
    /// Whether every counter lies inside the range the rules allow at rest.
    pub fn is_settled(&self, rules: &CountRules) -> bool {
        self.balls < rules.balls_for_walk
            && self.strikes < rules.strikes_for_out
            && self.outs < rules.outs_per_inning
    }
}

/// Button events that drive the count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountEvent {
    Ball,
    Strike,
    Out,
    Reset,
}

/// A settled count together with the status message describing what happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountUpdate {
    pub state: CountState,
    pub message: String,
}

/// Apply one event to a count. Total: every event yields a settled count.
pub fn apply(rules: &CountRules, state: CountState, event: CountEvent) -> CountUpdate {
    let update = match event {
        CountEvent::Ball => ball(rules, state),
        CountEvent::Strike => strike(rules, state),
        CountEvent::Out => out(rules, state),
        CountEvent::Reset => CountUpdate {
            state: CountState::default(),
            message: INITIAL_MESSAGE.to_string(),
        },
    };

    debug!(
        ?event,
        balls = update.state.balls,
        strikes = update.state.strikes,
        outs = update.state.outs,
        "count updated"
    );
    update
}

fn ball(rules: &CountRules, state: CountState) -> CountUpdate {
    let balls = state.balls.saturating_add(1);

    if balls >= rules.balls_for_walk {
        return CountUpdate {
            state: CountState {
                balls: 0,
                strikes: 0,
                outs: state.outs,
            },
            message: format!(
                "Ball {}! The batter earns a walk and runners advance.",
                cardinal(rules.balls_for_walk)
            ),
        };
    }

    CountUpdate {
        state: CountState { balls, ..state },
        message: format!(
            "Ball {balls}. {} more for a walk.",
            rules.balls_for_walk - balls
        ),
    }
}

fn strike(rules: &CountRules, state: CountState) -> CountUpdate {
    let strikes = state.strikes.saturating_add(1);

    if strikes >= rules.strikes_for_out {
        let outs = state.outs.saturating_add(1);
        let strike_call = cardinal(rules.strikes_for_out);

        // The inning-ending message replaces the plain strikeout one.
        if outs >= rules.outs_per_inning {
            return CountUpdate {
                state: CountState::default(),
                message: format!(
                    "Strike {strike_call}! That's the {} out — inning over!",
                    ordinal(rules.outs_per_inning)
                ),
            };
        }

        return CountUpdate {
            state: CountState {
                balls: 0,
                strikes: 0,
                outs,
            },
            message: format!("Strike {strike_call}! That's an out. Resetting the count."),
        };
    }

    let message = if strikes == rules.strikes_for_out - 1 {
        let noun = if strikes == 1 { "strike" } else { "strikes" };
        format!(
            "{} {noun} — the batter must protect the plate!",
            capitalize(&cardinal(strikes))
        )
    } else {
        format!(
            "Strike {}. The pitcher jumps ahead in the count.",
            cardinal(strikes)
        )
    };

    CountUpdate {
        state: CountState { strikes, ..state },
        message,
    }
}

fn out(rules: &CountRules, state: CountState) -> CountUpdate {
    let outs = state.outs.saturating_add(1);

    // An out on a ball in play always clears the batter's count.
    if outs >= rules.outs_per_inning {
        return CountUpdate {
            state: CountState::default(),
            message: format!(
                "{} outs recorded! The teams switch sides.",
                capitalize(&cardinal(rules.outs_per_inning))
            ),
        };
    }

    CountUpdate {
        state: CountState {
            balls: 0,
            strikes: 0,
            outs,
        },
        message: format!("Out number {outs}. One step closer to ending the inning."),
    }
}

/// Owns one count and the latest status message for a single view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountTracker {
    rules: CountRules,
    state: CountState,
    message: String,
}

impl Default for CountTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CountTracker {
    /// A tracker using regulation rules, starting at 0-0 with no outs.
    pub fn new() -> Self {
        Self {
            rules: CountRules::default(),
            state: CountState::default(),
            message: INITIAL_MESSAGE.to_string(),
        }
    }

    /// A tracker using custom thresholds.
    pub fn with_rules(rules: CountRules) -> Result<Self, RulesError> {
        rules.validate()?;
        Ok(Self {
            rules,
            ..Self::new()
        })
    }

    /// Apply an event and return the new count with its message.
    pub fn handle(&mut self, event: CountEvent) -> CountUpdate {
        let update = apply(&self.rules, self.state, event);
        self.state = update.state;
        self.message.clone_from(&update.message);
        update
    }

    pub fn ball(&mut self) -> CountUpdate {
        self.handle(CountEvent::Ball)
    }

    pub fn strike(&mut self) -> CountUpdate {
        self.handle(CountEvent::Strike)
    }

    pub fn out(&mut self) -> CountUpdate {
        self.handle(CountEvent::Out)
    }

    pub fn reset(&mut self) -> CountUpdate {
        self.handle(CountEvent::Reset)
    }

    pub fn state(&self) -> CountState {
        self.state
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn rules(&self) -> &CountRules {
        &self.rules
    }
}
