//! Transition table errors.

use super::state::{StateId, Symbol};
use thiserror::Error;

/// Errors from constructing or editing a transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table dimensions must be non-zero (states: {states}, symbols: {symbols})")]
    EmptyDimension { states: usize, symbols: usize },

    #[error("symbol {symbol} out of range (alphabet size {symbol_count})")]
    SymbolOutOfRange { symbol: Symbol, symbol_count: usize },

    #[error("no such state: {state} (state count {state_count})")]
    NoSuchState { state: StateId, state_count: usize },

    #[error("could not allocate a {states}x{symbols} transition table")]
    Allocation { states: usize, symbols: usize },
}

impl TableError {
    /// Returns whether this is a size error (bad dimension or symbol index).
    pub fn is_size_error(&self) -> bool {
        matches!(
            self,
            TableError::EmptyDimension { .. } | TableError::SymbolOutOfRange { .. }
        )
    }

    /// Returns a short, stable code for this error kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            TableError::EmptyDimension { .. } => "SIZE_ERR",
            TableError::SymbolOutOfRange { .. } => "SIZE_ERR",
            TableError::NoSuchState { .. } => "NO_STATE",
            TableError::Allocation { .. } => "ALLOC_ERR",
        }
    }
}
