//! Core Action trait for state machine alphabets.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for action labels.
///
/// Actions are the events or commands applied to a state. They share the
/// shape of [`State`] but play a disjoint role: an action never names a
/// position in the machine, only a trigger. The same bounds apply so
/// actions can live in transition tables and configuration files.
///
/// [`State`]: crate::core::State
///
/// # Example
///
/// ```rust
/// use flywheel::core::Action;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum JobAction {
///     Start,
///     Finish,
/// }
///
/// impl Action for JobAction {
///     fn name(&self) -> &str {
///         match self {
///             Self::Start => "START",
///             Self::Finish => "FINISH",
///         }
///     }
/// }
///
/// assert_eq!(JobAction::Start.name(), "START");
/// ```
pub trait Action:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the action's label for display/logging.
    fn name(&self) -> &str;
}

/// Plain strings are valid action labels, mirroring the `String` state impl.
impl Action for String {
    fn name(&self) -> &str {
        self
    }
}
