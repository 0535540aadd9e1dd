//! Audit rules for transition tables using Validation.

use crate::audit::issues::TableIssue;
use crate::core::{Designation, StateId, TransitionTable};
use std::collections::VecDeque;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for custom audit check functions
pub type AuditCheck =
    Box<dyn Fn(&TransitionTable) -> Validation<(), NonEmptyVec<TableIssue>> + Send + Sync>;

/// Audit rules for a configured table.
/// Uses Validation to accumulate ALL issues.
#[derive(Default)]
pub struct AuditRules {
    pub(crate) require_start: bool,
    pub(crate) require_accept: bool,
    pub(crate) require_complete: bool,
    pub(crate) forbid_unreachable: bool,
    pub(crate) single_start: bool,
    pub(crate) custom_checks: Vec<AuditCheck>,
}

impl AuditRules {
    /// Check every enabled rule, accumulating ALL issues.
    /// Returns Validation::Success(()) if all checks pass.
    /// Returns Validation::Failure with ALL issues if any fail.
    pub fn check(&self, table: &TransitionTable) -> Validation<(), NonEmptyVec<TableIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<TableIssue>>> = Vec::new();

        if self.require_start {
            checks.push(match table.start() {
                Some(_) => Validation::success(()),
                None => Validation::fail(TableIssue::MissingStart),
            });
        }

        if self.require_accept {
            checks.push(match table.accept_states().next() {
                Some(_) => Validation::success(()),
                None => Validation::fail(TableIssue::NoAcceptState),
            });
        }

        if self.require_complete {
            for state in table.states() {
                for (symbol, cell) in table.row(state.id()).unwrap_or(&[]).iter().enumerate() {
                    if cell.is_none() {
                        checks.push(Validation::fail(TableIssue::MissingTransition {
                            state: state.id(),
                            symbol,
                        }));
                    }
                }
            }
        }

        if self.forbid_unreachable {
            if let Some(start) = table.start() {
                let reachable = reachable_from(table, start);
                for (state, seen) in reachable.into_iter().enumerate() {
                    if !seen {
                        checks.push(Validation::fail(TableIssue::Unreachable { state }));
                    }
                }
            }
        }

        if self.single_start {
            for state in table.states() {
                let stale = state.designation() == Designation::Start
                    && table.start() != Some(state.id());
                if stale {
                    checks.push(Validation::fail(TableIssue::StaleStart { state: state.id() }));
                }
            }
        }

        for check_fn in &self.custom_checks {
            checks.push(check_fn(table));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

/// Breadth-first search over the grid, indexed by state id.
fn reachable_from(table: &TransitionTable, start: StateId) -> Vec<bool> {
    let mut seen = vec![false; table.state_count()];
    let mut queue = VecDeque::from([start]);
    seen[start] = true;

    while let Some(state) = queue.pop_front() {
        for to in table.row(state).unwrap_or(&[]).iter().flatten() {
            if !seen[*to] {
                seen[*to] = true;
                queue.push_back(*to);
            }
        }
    }
    seen
}
