//! The `State` trait implemented by every phase enum in the crate.
//!
//! A phase describes where a machine is, not the data it carries. The quiz
//! session, for instance, derives its `QuizPhase` from its fields and hands
//! that value to guards and to its transition history.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine phases.
///
/// All methods are pure. Implementors are small value types, usually
/// fieldless enums generated with [`state_enum!`](crate::state_enum).
///
/// # Required Traits
///
/// - `Clone`: phases are copied into history records
/// - `PartialEq`: guards and tests compare phases
/// - `Debug`: phases show up in logs and error messages
/// - `Serialize` + `Deserialize`: snapshots carrying a phase can be sent to a view layer as JSON
///
/// # Example
///
/// ```rust
/// use dugout::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum AtBat {
///     Batting,
///     Walked,
///     StruckOut,
/// }
///
/// impl State for AtBat {
///     fn name(&self) -> &str {
///         match self {
///             Self::Batting => "Batting",
///             Self::Walked => "Walked",
///             Self::StruckOut => "StruckOut",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Walked | Self::StruckOut)
///     }
/// }
///
/// assert!(AtBat::StruckOut.is_final());
/// assert!(!AtBat::Batting.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Whether the phase ends a run of the machine.
    ///
    /// A final phase may still be left through an explicit event (a
    /// completed quiz can be restarted); it only marks a natural stopping
    /// point. Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether the phase represents a failure.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Pitch {
        Windup,
        Delivered,
        Balk,
    }

    impl State for Pitch {
        fn name(&self) -> &str {
            match self {
                Self::Windup => "Windup",
                Self::Delivered => "Delivered",
                Self::Balk => "Balk",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Delivered | Self::Balk)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Balk)
        }
    }

    #[test]
    fn name_matches_variant() {
        assert_eq!(Pitch::Windup.name(), "Windup");
        assert_eq!(Pitch::Delivered.name(), "Delivered");
        assert_eq!(Pitch::Balk.name(), "Balk");
    }

    #[test]
    fn final_and_error_flags() {
        assert!(!Pitch::Windup.is_final());
        assert!(Pitch::Delivered.is_final());
        assert!(!Pitch::Delivered.is_error());
        assert!(Pitch::Balk.is_final());
        assert!(Pitch::Balk.is_error());
    }

    #[test]
    fn phase_serializes_as_variant_name() {
        let json = serde_json::to_string(&Pitch::Windup).unwrap();
        assert_eq!(json, "\"Windup\"");
        let back: Pitch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Pitch::Windup);
    }
}
