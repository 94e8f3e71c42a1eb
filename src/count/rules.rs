//! Thresholds that drive the count: how many balls walk a batter, how many
//! strikes retire one, how many outs end the half-inning.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a set of count rules cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("`{field}` must be at least 1")]
    ZeroThreshold { field: &'static str },
}

/// Count thresholds. Defaults are regulation baseball (4 / 3 / 3).
///
/// Deserializes from a partial document; missing fields keep their default.
///
/// ```
/// use dugout::count::CountRules;
///
/// let rules: CountRules = serde_json::from_str(r#"{ "balls_for_walk": 5 }"#).unwrap();
/// assert_eq!(rules.balls_for_walk, 5);
/// assert_eq!(rules.strikes_for_out, 3);
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountRules {
    pub balls_for_walk: u8,
    pub strikes_for_out: u8,
    pub outs_per_inning: u8,
}

impl Default for CountRules {
    fn default() -> Self {
        Self {
            balls_for_walk: 4,
            strikes_for_out: 3,
            outs_per_inning: 3,
        }
    }
}

impl CountRules {
    /// Reject thresholds of zero, which would settle a count before any pitch.
    pub fn validate(&self) -> Result<(), RulesError> {
        let fields = [
            ("balls_for_walk", self.balls_for_walk),
            ("strikes_for_out", self.strikes_for_out),
            ("outs_per_inning", self.outs_per_inning),
        ];
        match fields.into_iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(RulesError::ZeroThreshold { field }),
            None => Ok(()),
        }
    }
}

/// Spelled-out cardinal used in status messages ("Ball four!").
pub(crate) fn cardinal(n: u8) -> String {
    let word = match n {
        1 => "one",
        2 => "two",
        3 => "three",
        4 => "four",
        5 => "five",
        6 => "six",
        7 => "seven",
        8 => "eight",
        9 => "nine",
        10 => "ten",
        _ => return n.to_string(),
    };
    word.to_string()
}

/// Spelled-out ordinal used in status messages ("the third out").
pub(crate) fn ordinal(n: u8) -> String {
    let word = match n {
        1 => "first",
        2 => "second",
        3 => "third",
        4 => "fourth",
        5 => "fifth",
        6 => "sixth",
        7 => "seventh",
        8 => "eighth",
        9 => "ninth",
        10 => "tenth",
        _ => return format!("{n}th"),
    };
    word.to_string()
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
