//! Build errors for the validated transitioner builder.

use thiserror::Error;

/// Errors that can occur when building a transitioner with declaration
/// validation. Only the builder path validates; `Transitioner::new`
/// accepts any configuration unchecked.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition references undeclared state '{0}'. Declare it with .states(..)")]
    UndeclaredState(String),

    #[error("Transition references undeclared action '{0}'. Declare it with .actions(..)")]
    UndeclaredAction(String),

    #[error("Start state '{0}' is not in the declared state set")]
    UndeclaredStart(String),

    #[error("End state '{0}' is not in the declared state set")]
    UndeclaredEnd(String),
}
