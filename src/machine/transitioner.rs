//! The Transitioner: immutable configuration owner and machine factory.

use crate::core::{resolve, Action, State, Transition};
use crate::machine::error::MachineError;
use crate::machine::machine::{Machine, MachineOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Declarative configuration for a [`Transitioner`].
///
/// `states` and `actions` declare the finite alphabets. They are
/// validation scaffolding for the builder layer; [`Transitioner::new`]
/// accepts any configuration unchecked and never consults them during
/// resolution. Optional fields default when the config is deserialized,
/// so transition tables can live in configuration files.
///
/// # Example
///
/// ```rust
/// use flywheel::machine::TransitionerConfig;
///
/// let config: TransitionerConfig<String, String> = TransitionerConfig::from_json(
///     r#"{
///         "states": ["NEW", "DONE"],
///         "actions": ["FINISH"],
///         "transitions": [{"from": "NEW", "action": "FINISH", "to": "DONE"}],
///         "start": "NEW",
///         "end_states": ["DONE"]
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.transitions.len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionerConfig<S: State, A: Action> {
    /// The finite state alphabet
    #[serde(default)]
    pub states: Vec<S>,

    /// The finite action alphabet
    #[serde(default)]
    pub actions: Vec<A>,

    /// The ordered transition table
    #[serde(default)]
    pub transitions: Vec<Transition<S, A>>,

    /// Default start state for machines created without an override
    #[serde(default)]
    pub start: Option<S>,

    /// Terminal states; when absent, no state is ever terminal
    #[serde(default)]
    pub end_states: Option<Vec<S>>,
}

impl<S: State, A: Action> Default for TransitionerConfig<S, A> {
    fn default() -> Self {
        Self {
            states: Vec::new(),
            actions: Vec::new(),
            transitions: Vec::new(),
            start: None,
            end_states: None,
        }
    }
}

impl<S: State, A: Action> TransitionerConfig<S, A> {
    /// Load a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Immutable holder of a state machine's configuration.
///
/// A Transitioner owns the state set, action set, transition table,
/// optional default start state and optional end-state set for its entire
/// lifetime. It exposes the stateless resolver directly, classifies
/// terminal states, and manufactures [`Machine`] sessions. Because every
/// method takes `&self`, any number of machines may be created from, and
/// run against, the same Transitioner.
///
/// # Example
///
/// ```rust
/// use flywheel::core::Transition;
/// use flywheel::machine::{MachineOptions, Transitioner, TransitionerConfig};
///
/// let transitioner = Transitioner::new(TransitionerConfig {
///     states: vec!["NEW".to_string(), "RUNNING".to_string(), "DONE".to_string()],
///     actions: vec!["START".to_string(), "FINISH".to_string()],
///     transitions: vec![
///         Transition::new("NEW".to_string(), "START".to_string(), "RUNNING".to_string()),
///         Transition::new("RUNNING".to_string(), "FINISH".to_string(), "DONE".to_string()),
///     ],
///     start: Some("NEW".to_string()),
///     end_states: Some(vec!["DONE".to_string()]),
/// });
///
/// assert_eq!(
///     transitioner.transition(&"NEW".to_string(), &"START".to_string()),
///     Some(&"RUNNING".to_string()),
/// );
/// assert!(transitioner.is_terminal(&"DONE".to_string()));
///
/// let mut machine = transitioner.create_machine(MachineOptions::default()).unwrap();
/// machine.transition(&"START".to_string()).unwrap();
/// assert_eq!(machine.state(), "RUNNING");
/// ```
pub struct Transitioner<S: State, A: Action> {
    states: Vec<S>,
    actions: Vec<A>,
    transitions: Vec<Transition<S, A>>,
    start: Option<S>,
    end_states: Option<Vec<S>>,
}

impl<S: State, A: Action> Transitioner<S, A> {
    /// Create a Transitioner from a configuration.
    ///
    /// Infallible and unchecked: declared alphabets are not enforced
    /// against the table here. Use
    /// [`TransitionerBuilder`](crate::builder::TransitionerBuilder) for a
    /// validated construction path.
    pub fn new(config: TransitionerConfig<S, A>) -> Self {
        Self {
            states: config.states,
            actions: config.actions,
            transitions: config.transitions,
            start: config.start,
            end_states: config.end_states,
        }
    }

    /// Evaluate one transition statelessly (pure).
    ///
    /// Delegates to [`resolve`] over the owned table: `Some` on a unique
    /// match, `None` when the pair is undefined or ambiguous. No logging,
    /// no error - callers decide what `None` means.
    pub fn transition(&self, state: &S, action: &A) -> Option<&S> {
        resolve(&self.transitions, state, action)
    }

    /// Whether `state` is a configured terminal state.
    ///
    /// Always false when no end-state set was configured.
    pub fn is_terminal(&self, state: &S) -> bool {
        self.end_states
            .as_ref()
            .is_some_and(|ends| ends.contains(state))
    }

    /// Create a stateful [`Machine`] bound to this Transitioner.
    ///
    /// The initial state is `options.start` when provided, otherwise the
    /// configured default start state. Fails with
    /// [`MachineError::MissingStartState`] when neither is available; no
    /// partially-initialized machine is ever observable.
    pub fn create_machine(
        &self,
        options: MachineOptions<S>,
    ) -> Result<Machine<'_, S, A>, MachineError> {
        let MachineOptions {
            start,
            identifier,
            logger,
        } = options;

        let initial = start
            .or_else(|| self.start.clone())
            .ok_or(MachineError::MissingStartState)?;

        debug!(
            identifier = identifier.as_deref().unwrap_or_default(),
            state = initial.name(),
            "created state machine"
        );

        Ok(Machine::new(self, initial, identifier, logger))
    }

    /// The declared state alphabet.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// The declared action alphabet.
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// The owned transition table.
    pub fn transitions(&self) -> &[Transition<S, A>] {
        &self.transitions
    }

    /// The configured default start state, if any.
    pub fn start(&self) -> Option<&S> {
        self.start.as_ref()
    }

    /// The configured end-state set, if any.
    pub fn end_states(&self) -> Option<&[S]> {
        self.end_states.as_deref()
    }
}
