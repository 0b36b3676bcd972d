//! Flywheel: a table-driven finite state machine library
//!
//! Flywheel turns a finite set of states, a finite set of actions and an
//! explicit transition table into (a) a stateless evaluator and (b)
//! stateful machines that validate every requested transition, log each
//! attempt to an injected sink, and fail when no unique transition
//! applies. It is meant for embedding lifecycle tracking - jobs,
//! connections, workflow steps - without bespoke state-machine logic.
//!
//! # Core Concepts
//!
//! - **State / Action**: caller-defined finite alphabets via the `State`
//!   and `Action` traits (or the `state_enum!`/`action_enum!` macros)
//! - **Transitioner**: immutable configuration owner, stateless
//!   evaluator and machine factory
//! - **Machine**: a mutable session tracking one current state with
//!   guarded, logged transitions
//!
//! Resolution rejects ambiguity: a `(state, action)` pair matched by
//! zero or by several table rules resolves to nothing.
//!
//! # Example
//!
//! ```rust
//! use flywheel::core::Transition;
//! use flywheel::machine::{MachineOptions, Transitioner, TransitionerConfig};
//!
//! let transitioner = Transitioner::new(TransitionerConfig {
//!     states: vec!["NEW".to_string(), "RUNNING".to_string(), "DONE".to_string()],
//!     actions: vec!["START".to_string(), "FINISH".to_string()],
//!     transitions: vec![
//!         Transition::new("NEW".to_string(), "START".to_string(), "RUNNING".to_string()),
//!         Transition::new("RUNNING".to_string(), "FINISH".to_string(), "DONE".to_string()),
//!     ],
//!     start: Some("NEW".to_string()),
//!     end_states: Some(vec!["DONE".to_string()]),
//! });
//!
//! let mut machine = transitioner
//!     .create_machine(MachineOptions::new().identifier("job-1"))
//!     .unwrap();
//!
//! assert!(machine.can_transition(&"START".to_string()));
//! machine.transition(&"START".to_string()).unwrap();
//! machine.transition(&"FINISH".to_string()).unwrap();
//!
//! assert_eq!(machine.state(), "DONE");
//! assert!(machine.is_done());
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{resolve, Action, State, Transition, TransitionHistory, TransitionRecord};
pub use builder::{BuildError, TransitionerBuilder};
pub use machine::{LogSink, Machine, MachineError, MachineOptions, Transitioner, TransitionerConfig};
