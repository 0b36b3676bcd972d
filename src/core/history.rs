//! Diagnostic transition history.
//!
//! Machines append a record for every successful transition. The history
//! is a diagnostic log only: resolution never consults it, so the
//! automaton stays memoryless.

use crate::core::{Action, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, A: Action> {
    /// The state transitioned from
    pub from: S,
    /// The action that drove the transition
    pub action: A,
    /// The state transitioned to
    pub to: S,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions.
///
/// History is immutable - [`record`](Self::record) returns a new history
/// with the record appended.
///
/// # Example
///
/// ```rust
/// use flywheel::core::{TransitionHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let history: TransitionHistory<String, String> = TransitionHistory::new();
/// let history = history.record(TransitionRecord {
///     from: "NEW".to_string(),
///     action: "START".to_string(),
///     to: "RUNNING".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.records().len(), 1);
/// assert_eq!(history.path(), vec!["NEW", "RUNNING"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionHistory<S: State, A: Action> {
    records: Vec<TransitionRecord<S, A>>,
}

impl<S: State, A: Action> Default for TransitionHistory<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action> TransitionHistory<S, A> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new history.
    ///
    /// Pure: the existing history is left untouched.
    pub fn record(&self, record: TransitionRecord<S, A>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All recorded transitions in application order.
    pub fn records(&self) -> &[TransitionRecord<S, A>] {
        &self.records
    }

    /// The sequence of states visited: the first record's `from`, then
    /// every record's `to`. Empty when nothing was recorded.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Elapsed time between the first and last record, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
