//! Interpreter for transition tables.
//!
//! An [`Interpreter`] borrows a configured [`TransitionTable`](crate::core::TransitionTable)
//! and owns a cursor into it. It consumes symbols one at a time, runs the
//! action of each state it lands on, and classifies a finished run as
//! accepted or not.
//!
//! # Undefined transitions
//!
//! Consuming a symbol that has no transition out of the current state is an
//! error ([`InterpreterError::UndefinedTransition`]). The cursor stays where
//! it was and [`Interpreter::run`] stops at that symbol. Callers that want a
//! different policy (skip the symbol, fall back to a default state) can drive
//! [`Interpreter::step`] themselves.

mod machine;
mod outcome;

pub use machine::Interpreter;
pub use outcome::{InterpreterError, Verdict};
