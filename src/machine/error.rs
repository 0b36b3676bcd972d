//! Machine lifecycle and transition errors.

use thiserror::Error;

/// Errors raised by the machine factory and the guarded mutator.
///
/// Both kinds are fatal to the call that raised them and are never
/// retried internally. The `Display` rendering of `InvalidTransition` is
/// the same message handed to a bound log sink, literal braces included.
#[derive(Debug, Error)]
pub enum MachineError {
    /// Neither an explicit start option nor a configured default start
    /// state was available when creating a machine.
    #[error("Cannot create state machine, no start state defined.")]
    MissingStartState,

    /// The resolver yielded no unique result for the current state and
    /// requested action. The machine's state is left unchanged.
    #[error("Cannot transition {{{identifier}}} from {{{from}}} with action {{{action}}}.")]
    InvalidTransition {
        /// The machine's identifier, empty when none was configured
        identifier: String,
        /// Label of the state the machine was in
        from: String,
        /// Label of the rejected action
        action: String,
    },
}
