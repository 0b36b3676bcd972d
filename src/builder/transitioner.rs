//! Builder for constructing transitioners with declaration validation.

use crate::builder::error::BuildError;
use crate::core::{Action, State, Transition};
use crate::machine::{Transitioner, TransitionerConfig};

/// Builder for constructing a [`Transitioner`] with a fluent API.
///
/// Unlike [`Transitioner::new`], `build` validates that every transition
/// rule, the start state and the end states only reference declared
/// labels - the declared alphabets acting as validation scaffolding.
///
/// # Example
///
/// ```rust
/// use flywheel::builder::TransitionerBuilder;
///
/// let transitioner = TransitionerBuilder::new()
///     .states(["NEW".to_string(), "RUNNING".to_string(), "DONE".to_string()])
///     .actions(["START".to_string(), "FINISH".to_string()])
///     .transition("NEW".to_string(), "START".to_string(), "RUNNING".to_string())
///     .transition("RUNNING".to_string(), "FINISH".to_string(), "DONE".to_string())
///     .start("NEW".to_string())
///     .end_states(["DONE".to_string()])
///     .build()
///     .unwrap();
///
/// assert!(transitioner.is_terminal(&"DONE".to_string()));
/// ```
pub struct TransitionerBuilder<S: State, A: Action> {
    states: Vec<S>,
    actions: Vec<A>,
    transitions: Vec<Transition<S, A>>,
    start: Option<S>,
    end_states: Option<Vec<S>>,
}

impl<S: State, A: Action> TransitionerBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            actions: Vec::new(),
            transitions: Vec::new(),
            start: None,
            end_states: None,
        }
    }

    /// Declare the state alphabet.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Declare the action alphabet.
    pub fn actions(mut self, actions: impl IntoIterator<Item = A>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Add a transition rule.
    pub fn transition(mut self, from: S, action: A, to: S) -> Self {
        self.transitions.push(Transition::new(from, action, to));
        self
    }

    /// Add multiple pre-built transition rules at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition<S, A>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Set the default start state.
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Declare the end-state set.
    pub fn end_states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.end_states = Some(states.into_iter().collect());
        self
    }

    /// Validate declarations and build the transitioner.
    pub fn build(self) -> Result<Transitioner<S, A>, BuildError> {
        for rule in &self.transitions {
            for state in [&rule.from, &rule.to] {
                if !self.states.contains(state) {
                    return Err(BuildError::UndeclaredState(state.name().to_string()));
                }
            }
            if !self.actions.contains(&rule.action) {
                return Err(BuildError::UndeclaredAction(rule.action.name().to_string()));
            }
        }

        if let Some(start) = &self.start {
            if !self.states.contains(start) {
                return Err(BuildError::UndeclaredStart(start.name().to_string()));
            }
        }

        if let Some(ends) = &self.end_states {
            for end in ends {
                if !self.states.contains(end) {
                    return Err(BuildError::UndeclaredEnd(end.name().to_string()));
                }
            }
        }

        Ok(Transitioner::new(TransitionerConfig {
            states: self.states,
            actions: self.actions,
            transitions: self.transitions,
            start: self.start,
            end_states: self.end_states,
        }))
    }
}

impl<S: State, A: Action> Default for TransitionerBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
