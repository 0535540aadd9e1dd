//! Builder API for ergonomic table construction.
//!
//! This module provides a fluent builder and a declarative macro for
//! configuring transition tables with minimal boilerplate. Both apply the
//! same edits a caller would make by hand on a
//! [`TransitionTable`](crate::core::TransitionTable).

pub mod error;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use table::TableBuilder;

use crate::core::{Designation, Symbol, TransitionTable};

/// Build a machine that cycles through `state_count` states on one symbol.
///
/// State `0` is the start, the last state accepts, and every state moves to
/// the next (the last back to `0`) on `symbol`.
///
/// # Example
///
/// ```
/// use tablefsm::builder::cycle;
///
/// let table = cycle(3, 1, 0).unwrap();
/// assert_eq!(table.transition(2, 0).unwrap(), Some(0));
/// ```
pub fn cycle(
    state_count: usize,
    symbol_count: usize,
    symbol: Symbol,
) -> Result<TransitionTable, BuildError> {
    let mut builder = TableBuilder::new(state_count, symbol_count).start(0);
    if state_count > 1 {
        builder = builder.state(state_count - 1, Designation::Accept);
    }
    for from in 0..state_count {
        builder = builder.transition(from, (from + 1) % state_count, symbol);
    }
    builder.build()
}
