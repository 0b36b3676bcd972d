//! Transition rules and the pure resolver.
//!
//! A transition table is an ordered sequence of `(from, action, to)` rules.
//! Resolution is a side-effect-free scan: a lookup succeeds only when
//! exactly one rule matches the `(from, action)` pair. Zero matches and
//! several matches both collapse to "no result" - an ambiguous table entry
//! is rejected rather than resolved by position.

use crate::core::{Action, State};
use serde::{Deserialize, Serialize};

/// A single configured transition rule.
///
/// The same `(from, action)` pair may appear in more than one rule; the
/// table stays valid, but [`resolve`] treats the pair as unresolvable.
///
/// # Example
///
/// ```rust
/// use flywheel::core::Transition;
///
/// let rule = Transition::new(
///     "NEW".to_string(),
///     "START".to_string(),
///     "RUNNING".to_string(),
/// );
/// assert!(rule.matches(&"NEW".to_string(), &"START".to_string()));
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State, A: Action> {
    /// The state the rule applies from
    pub from: S,
    /// The action that triggers the rule
    pub action: A,
    /// The state the rule moves to
    pub to: S,
}

impl<S: State, A: Action> Transition<S, A> {
    /// Create a transition rule.
    pub fn new(from: S, action: A, to: S) -> Self {
        Self { from, action, to }
    }

    /// Check whether this rule applies to the given pair (pure).
    pub fn matches(&self, from: &S, action: &A) -> bool {
        self.from == *from && self.action == *action
    }
}

/// Resolve a `(from, action)` pair against a transition table (pure).
///
/// Returns the target state of the unique matching rule, or `None` when
/// the table contains zero or more than one matching rule. Absence of a
/// result is a normal outcome here, not an error - callers decide what it
/// means.
///
/// # Example
///
/// ```rust
/// use flywheel::core::{resolve, Transition};
///
/// let table = vec![
///     Transition::new("NEW".to_string(), "START".to_string(), "RUNNING".to_string()),
///     Transition::new("RUNNING".to_string(), "FINISH".to_string(), "DONE".to_string()),
/// ];
///
/// let next = resolve(&table, &"NEW".to_string(), &"START".to_string());
/// assert_eq!(next, Some(&"RUNNING".to_string()));
///
/// assert!(resolve(&table, &"NEW".to_string(), &"FINISH".to_string()).is_none());
/// ```
pub fn resolve<'a, S: State, A: Action>(
    table: &'a [Transition<S, A>],
    from: &S,
    action: &A,
) -> Option<&'a S> {
    let mut matches = table.iter().filter(|rule| rule.matches(from, action));
    match (matches.next(), matches.next()) {
        (Some(rule), None) => Some(&rule.to),
        _ => None,
    }
}
