//! Stateful machine sessions with guarded, logged transitions.

use crate::core::{resolve, Action, State, TransitionHistory, TransitionRecord};
use crate::machine::error::MachineError;
use crate::machine::transitioner::Transitioner;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, trace};

/// Type alias for injected log sinks.
///
/// A sink is a caller-supplied callback invoked synchronously with each
/// formatted transition message. The machine never catches or suppresses
/// a sink's own failures.
pub type LogSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Options for creating a [`Machine`].
///
/// # Example
///
/// ```rust
/// use flywheel::machine::MachineOptions;
///
/// let options = MachineOptions::new()
///     .start("NEW".to_string())
///     .identifier("job-42")
///     .logger(|message| println!("{message}"));
/// ```
pub struct MachineOptions<S: State> {
    /// Initial state override; falls back to the Transitioner's default
    pub start: Option<S>,
    /// Identifier for logging/diagnostics only
    pub identifier: Option<String>,
    /// Optional log sink for transition messages
    pub logger: Option<LogSink>,
}

impl<S: State> Default for MachineOptions<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> MachineOptions<S> {
    /// Create empty options.
    pub fn new() -> Self {
        Self {
            start: None,
            identifier: None,
            logger: None,
        }
    }

    /// Set the initial state, overriding the Transitioner's default.
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Set the machine's identifier.
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Set the log sink.
    pub fn logger<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.logger = Some(Arc::new(sink));
        self
    }
}

/// A stateful session tracking one current state.
///
/// Machines are created by [`Transitioner::create_machine`] and borrow
/// their parent's transition table - a machine never has an independent
/// table. The current state cell is mutated only by successful
/// [`transition`](Self::transition) calls, which take `&mut self`;
/// concurrent access to one machine must therefore be serialized by the
/// caller, while the shared parent Transitioner needs no coordination.
pub struct Machine<'t, S: State, A: Action> {
    transitioner: &'t Transitioner<S, A>,
    current: S,
    identifier: Option<String>,
    logger: Option<LogSink>,
    history: TransitionHistory<S, A>,
}

impl<'t, S: State, A: Action> Machine<'t, S, A> {
    pub(crate) fn new(
        transitioner: &'t Transitioner<S, A>,
        initial: S,
        identifier: Option<String>,
        logger: Option<LogSink>,
    ) -> Self {
        Self {
            transitioner,
            current: initial,
            identifier,
            logger,
            history: TransitionHistory::new(),
        }
    }

    /// The current state (pure).
    pub fn state(&self) -> &S {
        &self.current
    }

    /// The machine's identifier, if one was configured.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Whether the current state is terminal for the parent Transitioner.
    ///
    /// Advisory only: a done machine can still transition if the table
    /// defines outgoing rules for its state.
    pub fn is_done(&self) -> bool {
        self.transitioner.is_terminal(&self.current)
    }

    /// Whether `action` would resolve from the current state (pure probe).
    ///
    /// Never mutates, never logs, never fails - the non-throwing
    /// counterpart of [`transition`](Self::transition).
    pub fn can_transition(&self, action: &A) -> bool {
        resolve(self.transitioner.transitions(), &self.current, action).is_some()
    }

    /// Apply `action` to the current state.
    ///
    /// On a unique resolution the success message is passed to the bound
    /// sink, the transition is recorded, the cell is mutated and the new
    /// state returned. Otherwise the failure message is passed to the
    /// sink and [`MachineError::InvalidTransition`] carrying the same
    /// message is returned, with the current state left unchanged.
    pub fn transition(&mut self, action: &A) -> Result<&S, MachineError> {
        let next = resolve(self.transitioner.transitions(), &self.current, action).cloned();

        let Some(next) = next else {
            let err = MachineError::InvalidTransition {
                identifier: self.ident().to_string(),
                from: self.current.name().to_string(),
                action: action.name().to_string(),
            };
            debug!(
                identifier = self.ident(),
                from = self.current.name(),
                action = action.name(),
                "transition rejected"
            );
            self.log(&err.to_string());
            return Err(err);
        };

        trace!(
            identifier = self.ident(),
            from = self.current.name(),
            action = action.name(),
            to = next.name(),
            "transition applied"
        );
        self.log(&format!(
            "Transitioned {{{}}} from {{{}}} with action {{{}}} to {{{}}}.",
            self.ident(),
            self.current.name(),
            action.name(),
            next.name(),
        ));

        self.history = self.history.record(TransitionRecord {
            from: self.current.clone(),
            action: action.clone(),
            to: next.clone(),
            timestamp: Utc::now(),
        });
        self.current = next;
        Ok(&self.current)
    }

    /// Diagnostic history of successful transitions.
    pub fn history(&self) -> &TransitionHistory<S, A> {
        &self.history
    }

    /// The parent Transitioner this machine delegates to.
    pub fn transitioner(&self) -> &'t Transitioner<S, A> {
        self.transitioner
    }

    fn ident(&self) -> &str {
        self.identifier.as_deref().unwrap_or_default()
    }

    // The single "log if present" point; sink panics propagate.
    fn log(&self, message: &str) {
        if let Some(logger) = self.logger.as_deref() {
            logger(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transition;
    use crate::machine::transitioner::TransitionerConfig;
    use std::sync::Mutex;

    fn job_transitioner() -> Transitioner<String, String> {
        Transitioner::new(TransitionerConfig {
            states: vec![
                "NEW".to_string(),
                "RUNNING".to_string(),
                "ERROR".to_string(),
                "DONE".to_string(),
            ],
            actions: vec![
                "BEGAN EXECUTING".to_string(),
                "HAD ERROR".to_string(),
                "FINISHED".to_string(),
            ],
            transitions: vec![
                Transition::new(
                    "NEW".to_string(),
                    "BEGAN EXECUTING".to_string(),
                    "RUNNING".to_string(),
                ),
                Transition::new(
                    "NEW".to_string(),
                    "HAD ERROR".to_string(),
                    "ERROR".to_string(),
                ),
                Transition::new(
                    "RUNNING".to_string(),
                    "HAD ERROR".to_string(),
                    "ERROR".to_string(),
                ),
                Transition::new(
                    "RUNNING".to_string(),
                    "FINISHED".to_string(),
                    "DONE".to_string(),
                ),
            ],
            start: Some("NEW".to_string()),
            end_states: Some(vec!["ERROR".to_string(), "DONE".to_string()]),
        })
    }

    fn capture() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + Sync) {
        let lines: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        let logger = move |message: &str| {
            sink.lock().unwrap().push(message.to_string());
        };
        (lines, logger)
    }

    #[test]
    fn can_transition_probes_without_mutating() {
        let transitioner = job_transitioner();
        let machine = transitioner
            .create_machine(MachineOptions::default())
            .unwrap();

        assert!(!machine.can_transition(&"FINISHED".to_string()));
        assert!(machine.can_transition(&"HAD ERROR".to_string()));
        assert_eq!(machine.state(), "NEW");
    }

    #[test]
    fn transition_mutates_and_returns_new_state() {
        let transitioner = job_transitioner();
        let mut machine = transitioner
            .create_machine(MachineOptions::default())
            .unwrap();

        let next = machine
            .transition(&"BEGAN EXECUTING".to_string())
            .unwrap()
            .clone();
        assert_eq!(next, "RUNNING");
        assert_eq!(machine.state(), "RUNNING");
    }

    #[test]
    fn invalid_transition_fails_and_leaves_state_unchanged() {
        let transitioner = job_transitioner();
        let mut machine = transitioner
            .create_machine(MachineOptions::default())
            .unwrap();

        let result = machine.transition(&"FINISHED".to_string());
        assert!(matches!(
            result,
            Err(MachineError::InvalidTransition { .. })
        ));
        assert_eq!(machine.state(), "NEW");
    }

    #[test]
    fn machine_reaches_terminal_state() {
        let transitioner = job_transitioner();
        let mut machine = transitioner
            .create_machine(MachineOptions::new().start("NEW".to_string()))
            .unwrap();

        assert!(!machine.is_done());
        machine.transition(&"HAD ERROR".to_string()).unwrap();
        assert_eq!(machine.state(), "ERROR");
        assert!(machine.is_done());
    }

    #[test]
    fn is_done_never_blocks_transitions() {
        // ERROR is terminal but has an outgoing rule; driving past it is
        // the caller's call.
        let transitioner = Transitioner::new(TransitionerConfig {
            transitions: vec![
                Transition::new(
                    "NEW".to_string(),
                    "HAD ERROR".to_string(),
                    "ERROR".to_string(),
                ),
                Transition::new(
                    "ERROR".to_string(),
                    "RETRIED".to_string(),
                    "NEW".to_string(),
                ),
            ],
            start: Some("NEW".to_string()),
            end_states: Some(vec!["ERROR".to_string()]),
            ..TransitionerConfig::default()
        });

        let mut machine = transitioner
            .create_machine(MachineOptions::default())
            .unwrap();
        machine.transition(&"HAD ERROR".to_string()).unwrap();
        assert!(machine.is_done());

        machine.transition(&"RETRIED".to_string()).unwrap();
        assert_eq!(machine.state(), "NEW");
        assert!(!machine.is_done());
    }

    #[test]
    fn success_message_matches_contract() {
        let transitioner = job_transitioner();
        let (lines, logger) = capture();
        let mut machine = transitioner
            .create_machine(
                MachineOptions::new()
                    .identifier("job-42")
                    .logger(logger),
            )
            .unwrap();

        machine.transition(&"BEGAN EXECUTING".to_string()).unwrap();

        let lines = lines.lock().unwrap();
        assert_eq!(
            lines.as_slice(),
            ["Transitioned {job-42} from {NEW} with action {BEGAN EXECUTING} to {RUNNING}."]
        );
    }

    #[test]
    fn failure_message_matches_contract_and_error() {
        let transitioner = job_transitioner();
        let (lines, logger) = capture();
        let mut machine = transitioner
            .create_machine(
                MachineOptions::new()
                    .identifier("job-42")
                    .logger(logger),
            )
            .unwrap();

        let err = machine.transition(&"FINISHED".to_string()).unwrap_err();

        let lines = lines.lock().unwrap();
        assert_eq!(
            lines.as_slice(),
            ["Cannot transition {job-42} from {NEW} with action {FINISHED}."]
        );
        assert_eq!(err.to_string(), lines[0]);
    }

    #[test]
    fn absent_identifier_logs_empty_placeholder() {
        let transitioner = job_transitioner();
        let (lines, logger) = capture();
        let mut machine = transitioner
            .create_machine(MachineOptions::new().logger(logger))
            .unwrap();

        machine.transition(&"HAD ERROR".to_string()).unwrap();
        let _ = machine.transition(&"HAD ERROR".to_string());

        let lines = lines.lock().unwrap();
        assert_eq!(
            lines.as_slice(),
            [
                "Transitioned {} from {NEW} with action {HAD ERROR} to {ERROR}.",
                "Cannot transition {} from {ERROR} with action {HAD ERROR}.",
            ]
        );
    }

    #[test]
    fn log_lines_follow_call_order() {
        let transitioner = job_transitioner();
        let (lines, logger) = capture();
        let mut machine = transitioner
            .create_machine(
                MachineOptions::new()
                    .identifier("job-1")
                    .logger(logger),
            )
            .unwrap();

        machine.transition(&"BEGAN EXECUTING".to_string()).unwrap();
        let _ = machine.transition(&"BEGAN EXECUTING".to_string());
        machine.transition(&"FINISHED".to_string()).unwrap();

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Transitioned {job-1} from {NEW}"));
        assert!(lines[1].starts_with("Cannot transition {job-1} from {RUNNING}"));
        assert!(lines[2].starts_with("Transitioned {job-1} from {RUNNING}"));
    }

    #[test]
    fn machine_without_logger_stays_silent() {
        let transitioner = job_transitioner();
        let mut machine = transitioner
            .create_machine(MachineOptions::default())
            .unwrap();

        // No sink bound; both branches still behave.
        machine.transition(&"BEGAN EXECUTING".to_string()).unwrap();
        assert!(machine.transition(&"BEGAN EXECUTING".to_string()).is_err());
        assert_eq!(machine.state(), "RUNNING");
    }

    #[test]
    fn probe_never_logs() {
        let transitioner = job_transitioner();
        let (lines, logger) = capture();
        let machine = transitioner
            .create_machine(MachineOptions::new().logger(logger))
            .unwrap();

        machine.can_transition(&"BEGAN EXECUTING".to_string());
        machine.can_transition(&"FINISHED".to_string());

        assert!(lines.lock().unwrap().is_empty());
    }

    #[test]
    fn history_records_successful_transitions_only() {
        let transitioner = job_transitioner();
        let mut machine = transitioner
            .create_machine(MachineOptions::default())
            .unwrap();

        machine.transition(&"BEGAN EXECUTING".to_string()).unwrap();
        let _ = machine.transition(&"BEGAN EXECUTING".to_string());
        machine.transition(&"FINISHED".to_string()).unwrap();

        let records = machine.history().records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].action, "BEGAN EXECUTING");
        assert_eq!(records[1].action, "FINISHED");
        assert_eq!(machine.history().path(), vec!["NEW", "RUNNING", "DONE"]);
    }

    #[test]
    fn identifier_accessor_reflects_options() {
        let transitioner = job_transitioner();
        let named = transitioner
            .create_machine(MachineOptions::new().identifier("job-7"))
            .unwrap();
        let anonymous = transitioner
            .create_machine(MachineOptions::default())
            .unwrap();

        assert_eq!(named.identifier(), Some("job-7"));
        assert_eq!(anonymous.identifier(), None);
    }

    #[test]
    fn ambiguous_rule_fails_the_machine_transition() {
        let transitioner = Transitioner::new(TransitionerConfig {
            transitions: vec![
                Transition::new(
                    "NEW".to_string(),
                    "START".to_string(),
                    "RUNNING".to_string(),
                ),
                Transition::new("NEW".to_string(), "START".to_string(), "ERROR".to_string()),
            ],
            start: Some("NEW".to_string()),
            ..TransitionerConfig::default()
        });

        let mut machine = transitioner
            .create_machine(MachineOptions::default())
            .unwrap();

        assert!(!machine.can_transition(&"START".to_string()));
        assert!(machine.transition(&"START".to_string()).is_err());
        assert_eq!(machine.state(), "NEW");
    }
}
