//! Transition table types.
//!
//! This module contains the machine definition:
//! - States with designations and optional actions
//! - The dense `states × symbols` transition table
//! - Step history recorded by interpreters
//!
//! Nothing here runs a machine; see [`crate::interpreter`] for that.

mod action;
mod error;
mod history;
mod state;
mod table;

pub use action::Action;
pub use error::TableError;
pub use history::{RunHistory, StepRecord, DEFAULT_HISTORY_LIMIT};
pub use state::{Designation, State, StateId, Symbol};
pub use table::TransitionTable;
