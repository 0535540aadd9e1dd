//! States of a transition table.
//!
//! States are identified by dense, zero-based indices assigned when the
//! table is constructed. Each carries a designation and an optional action.

use super::action::Action;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a state within its table.
pub type StateId = usize;

/// Index of a symbol within a table's input alphabet.
pub type Symbol = usize;

/// Role a state plays in a machine.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::Designation;
///
/// assert!(Designation::Accept.is_accept());
/// assert!(!Designation::Normal.is_start());
/// assert_eq!(Designation::default(), Designation::Normal);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Designation {
    /// The state an interpreter begins in.
    Start,
    /// A state that accepts the input when a run ends in it.
    Accept,
    /// Neither start nor accepting.
    #[default]
    Normal,
}

impl Designation {
    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Accept => "Accept",
            Self::Normal => "Normal",
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start)
    }

    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single state owned by a [`TransitionTable`](super::TransitionTable).
///
/// The id never changes after construction; designation and action are
/// replaced wholesale by [`configure_state`](super::TransitionTable::configure_state).
#[derive(Clone, Debug)]
pub struct State {
    id: StateId,
    designation: Designation,
    action: Option<Action>,
}

impl State {
    pub(crate) fn new(id: StateId) -> Self {
        Self {
            id,
            designation: Designation::Normal,
            action: None,
        }
    }

    pub(crate) fn configure(&mut self, designation: Designation, action: Option<Action>) {
        self.designation = designation;
        self.action = action;
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn designation(&self) -> Designation {
        self.designation
    }

    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// Check if this state accepts the input a run ends on.
    pub fn is_accept(&self) -> bool {
        self.designation.is_accept()
    }

    /// Invoke the action, if any. No-op otherwise.
    pub fn run_action(&self) {
        if let Some(action) = &self.action {
            action.run();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn new_state_is_normal_without_action() {
        let state = State::new(4);
        assert_eq!(state.id(), 4);
        assert_eq!(state.designation(), Designation::Normal);
        assert!(state.action().is_none());
        assert!(!state.is_accept());
    }

    #[test]
    fn configure_overwrites_designation_and_action() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let mut state = State::new(0);

        state.configure(
            Designation::Accept,
            Some(Action::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
        );
        assert!(state.is_accept());
        state.run_action();
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        state.configure(Designation::Normal, None);
        assert_eq!(state.designation(), Designation::Normal);
        state.run_action();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn designation_names_are_stable() {
        assert_eq!(Designation::Start.to_string(), "Start");
        assert_eq!(Designation::Accept.to_string(), "Accept");
        assert_eq!(Designation::Normal.to_string(), "Normal");
    }

    #[test]
    fn designation_serializes_correctly() {
        let json = serde_json::to_string(&Designation::Accept).unwrap();
        let back: Designation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Designation::Accept);
    }
}
