//! Builder for constructing transition tables.

use crate::audit::AuditRules;
use crate::builder::error::BuildError;
use crate::core::{Action, Designation, StateId, Symbol, TransitionTable};
use stillwater::validation::Validation;

struct StateConfig {
    state: StateId,
    designation: Designation,
    action: Option<Action>,
}

/// Builder for transition tables with a fluent API.
///
/// Configuration is recorded in call order and applied by [`build`](Self::build),
/// so later calls win exactly as they would with direct table edits.
pub struct TableBuilder {
    state_count: usize,
    symbol_count: usize,
    states: Vec<StateConfig>,
    transitions: Vec<(StateId, StateId, Symbol)>,
    audit: Option<AuditRules>,
}

impl TableBuilder {
    /// Create a builder for a table with the given dimensions.
    pub fn new(state_count: usize, symbol_count: usize) -> Self {
        Self {
            state_count,
            symbol_count,
            states: Vec::new(),
            transitions: Vec::new(),
            audit: None,
        }
    }

    /// Set a state's designation, without an action.
    pub fn state(mut self, state: StateId, designation: Designation) -> Self {
        self.states.push(StateConfig {
            state,
            designation,
            action: None,
        });
        self
    }

    /// Set a state's designation and action.
    pub fn state_with<A>(mut self, state: StateId, designation: Designation, action: A) -> Self
    where
        A: Into<Action>,
    {
        self.states.push(StateConfig {
            state,
            designation,
            action: Some(action.into()),
        });
        self
    }

    /// Shorthand for `.state(state, Designation::Start)`.
    pub fn start(self, state: StateId) -> Self {
        self.state(state, Designation::Start)
    }

    /// Shorthand for `.state(state, Designation::Accept)`.
    pub fn accept(self, state: StateId) -> Self {
        self.state(state, Designation::Accept)
    }

    /// Add a transition from `from` to `to` on `symbol`.
    pub fn transition(mut self, from: StateId, to: StateId, symbol: Symbol) -> Self {
        self.transitions.push((from, to, symbol));
        self
    }

    /// Reject the built table unless it passes `rules`.
    pub fn audit(mut self, rules: AuditRules) -> Self {
        self.audit = Some(rules);
        self
    }

    /// Build the table.
    /// Returns the first table error hit, or every audit issue found.
    pub fn build(self) -> Result<TransitionTable, BuildError> {
        let mut table = TransitionTable::new(self.state_count, self.symbol_count)?;

        for config in self.states {
            table.configure_state(config.state, config.designation, config.action)?;
        }
        for (from, to, symbol) in self.transitions {
            table.add_transition(from, to, symbol)?;
        }

        if let Some(rules) = self.audit {
            if let Validation::Failure(issues) = rules.check(&table) {
                let issues: Vec<_> = issues.iter().cloned().collect();
                tracing::debug!("table rejected by audit: {} issue(s)", issues.len());
                return Err(BuildError::Audit(issues));
            }
        }

        Ok(table)
    }
}
