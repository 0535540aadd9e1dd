//! Builder API for creating audit rules.

use crate::audit::issues::TableIssue;
use crate::audit::rules::AuditRules;
use crate::core::TransitionTable;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating audit rules
pub struct AuditBuilder {
    rules: AuditRules,
}

impl AuditBuilder {
    pub fn new() -> Self {
        Self {
            rules: AuditRules::default(),
        }
    }

    /// Require a recorded start state
    pub fn require_start(mut self) -> Self {
        self.rules.require_start = true;
        self
    }

    /// Require at least one `Accept` state
    pub fn require_accept(mut self) -> Self {
        self.rules.require_accept = true;
        self
    }

    /// Require a transition in every cell
    pub fn require_complete(mut self) -> Self {
        self.rules.require_complete = true;
        self
    }

    /// Report states not reachable from the start state
    pub fn forbid_unreachable(mut self) -> Self {
        self.rules.forbid_unreachable = true;
        self
    }

    /// Report states still tagged `Start` after the start moved elsewhere
    pub fn single_start(mut self) -> Self {
        self.rules.single_start = true;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&TransitionTable) -> Validation<(), NonEmptyVec<TableIssue>> + Send + Sync + 'static,
    {
        self.rules.custom_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&TransitionTable) -> bool + Send + Sync + 'static,
    {
        let check = move |table: &TransitionTable| {
            if predicate(table) {
                Validation::success(())
            } else {
                Validation::fail(TableIssue::Custom {
                    message: error_msg.clone(),
                })
            }
        };
        self.rules.custom_checks.push(Box::new(check));
        self
    }

    /// Build the audit rules
    pub fn build(self) -> AuditRules {
        self.rules
    }
}

impl Default for AuditBuilder {
    fn default() -> Self {
        Self::new()
    }
}
