//! Macros for declaring phase enums.

/// Declare a fieldless phase enum and implement [`State`](crate::core::State) for it.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Debug` and serde's `Serialize`/`Deserialize`.
///
/// # Example
///
/// ```
/// use dugout::state_enum;
/// use dugout::core::State;
///
/// state_enum! {
///     pub enum PlateAppearance {
///         Batting,
///         Walked,
///         StruckOut,
///     }
///     final: [Walked, StruckOut]
/// }
///
/// assert_eq!(PlateAppearance::Walked.name(), "Walked");
/// assert!(PlateAppearance::StruckOut.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
