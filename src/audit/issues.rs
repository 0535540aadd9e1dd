//! Structural issues found by an audit.

use crate::core::{StateId, Symbol};
use thiserror::Error;

/// A structural problem with a configured transition table
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableIssue {
    #[error("no start state configured")]
    MissingStart,

    #[error("no state is designated Accept")]
    NoAcceptState,

    #[error("no transition out of state {state} on symbol {symbol}")]
    MissingTransition { state: StateId, symbol: Symbol },

    #[error("state {state} is unreachable from the start state")]
    Unreachable { state: StateId },

    #[error("state {state} is tagged Start but is not the table's start state")]
    StaleStart { state: StateId },

    #[error("custom check failed: {message}")]
    Custom { message: String },
}
