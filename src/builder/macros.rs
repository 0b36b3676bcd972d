//! Macros for ergonomic alphabet definition.

/// Generate a state enum with its `State` trait implementation.
///
/// Labels default to the variant name; a `Variant => "label"` arm
/// overrides it, which is how labels that are not valid identifiers
/// (spaces, punctuation) are expressed.
///
/// # Example
///
/// ```
/// use flywheel::core::State;
/// use flywheel::state_enum;
///
/// state_enum! {
///     pub enum JobState {
///         New => "NEW",
///         Running => "RUNNING",
///         Done => "DONE",
///     }
/// }
///
/// assert_eq!(JobState::Running.name(), "RUNNING");
/// ```
#[macro_export]
macro_rules! state_enum {
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (@label $variant:ident, $label:literal) => {
        $label
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@label $variant $(, $label)?)),*
                }
            }
        }
    };
}

/// Generate an action enum with its `Action` trait implementation.
///
/// Same shape as [`state_enum!`], for the action alphabet.
///
/// # Example
///
/// ```
/// use flywheel::action_enum;
/// use flywheel::core::Action;
///
/// action_enum! {
///     pub enum JobAction {
///         BeganExecuting => "BEGAN EXECUTING",
///         HadError => "HAD ERROR",
///         Finished => "FINISHED",
///     }
/// }
///
/// assert_eq!(JobAction::HadError.name(), "HAD ERROR");
/// ```
#[macro_export]
macro_rules! action_enum {
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (@label $variant:ident, $label:literal) => {
        $label
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Action for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::action_enum!(@label $variant $(, $label)?)),*
                }
            }
        }
    };
}
