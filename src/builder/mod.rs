//! Builder API for ergonomic transitioner construction.
//!
//! This module provides a fluent builder and macros for declaring
//! alphabets and transition tables with minimal boilerplate. The builder
//! is the validated construction path: it checks every rule, the start
//! state and the end states against the declared alphabets, which
//! `Transitioner::new` deliberately does not.

pub mod error;
pub mod macros;
pub mod transitioner;

pub use error::BuildError;
pub use transitioner::TransitionerBuilder;
