//! Build errors for the table builder.

use crate::audit::TableIssue;
use crate::core::TableError;
use thiserror::Error;

/// Errors that can occur when building a transition table.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("table failed audit with {} issue(s)", .0.len())]
    Audit(Vec<TableIssue>),
}
