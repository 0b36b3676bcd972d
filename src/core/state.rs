//! Core State trait for state machine alphabets.
//!
//! States are opaque labels drawn from a finite, caller-defined set. The
//! trait provides pure methods for inspecting a label without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state labels.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe one position in a state machine. Whether a state
/// is terminal is configuration owned by the [`Transitioner`], not a
/// property of the label type.
///
/// [`Transitioner`]: crate::machine::Transitioner
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for transition tables and history
/// - `PartialEq`: states must be comparable for transition lookup
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be loadable from configuration
///
/// # Example
///
/// ```rust
/// use flywheel::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum JobState {
///     New,
///     Running,
///     Done,
/// }
///
/// impl State for JobState {
///     fn name(&self) -> &str {
///         match self {
///             Self::New => "NEW",
///             Self::Running => "RUNNING",
///             Self::Done => "DONE",
///         }
///     }
/// }
///
/// assert_eq!(JobState::Running.name(), "RUNNING");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's label for display/logging.
    ///
    /// The label appears verbatim in transition log messages.
    fn name(&self) -> &str;
}

/// Plain strings are valid state labels: the label is the string itself.
/// Useful for ad-hoc alphabets and configuration-driven tables.
impl State for String {
    fn name(&self) -> &str {
        self
    }
}
