//! Run verdicts and interpreter errors.

use crate::core::{Designation, StateId, Symbol, TableError};
use serde::{Deserialize, Serialize};

/// Outcome of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The run ended in an `Accept` state
    Accepted,

    /// The run ended in any other state
    NotAccepted,
}

impl Verdict {
    /// Classify the state a run ended in.
    pub fn from_designation(designation: Designation) -> Self {
        if designation.is_accept() {
            Verdict::Accepted
        } else {
            Verdict::NotAccepted
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Errors that can occur while interpreting input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterpreterError {
    #[error("machine has no start state")]
    NoStartState,

    #[error("invalid symbol {symbol} (alphabet size {symbol_count})")]
    InvalidSymbol { symbol: Symbol, symbol_count: usize },

    #[error("no transition out of state {state} on symbol {symbol}")]
    UndefinedTransition { state: StateId, symbol: Symbol },

    #[error(transparent)]
    Table(#[from] TableError),
}

impl InterpreterError {
    /// Returns a short, stable code for this error kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            InterpreterError::NoStartState => "MACHINE_NO_START",
            InterpreterError::InvalidSymbol { .. } => "SYMB_ERR",
            InterpreterError::UndefinedTransition { .. } => "TRANS_ERR",
            InterpreterError::Table(e) => e.error_code(),
        }
    }
}
