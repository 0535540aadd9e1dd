//! Dense transition table.
//!
//! The table owns a fixed list of states and a `states × symbols` grid in
//! which every cell is either empty or names a destination state. Both are
//! sized once at construction and never resized. Lookups are O(1): the grid
//! is a single contiguous vector addressed with a row stride equal to the
//! alphabet size.

use super::action::Action;
use super::error::TableError;
use super::state::{Designation, State, StateId, Symbol};
use std::fmt;

/// Table-driven finite state machine definition.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::{Designation, TransitionTable};
///
/// let mut table = TransitionTable::new(3, 1).unwrap();
/// table.configure_state(0, Designation::Start, None).unwrap();
/// table.configure_state(2, Designation::Accept, None).unwrap();
/// table.add_transition(0, 1, 0).unwrap();
/// table.add_transition(1, 2, 0).unwrap();
///
/// assert_eq!(table.start(), Some(0));
/// assert_eq!(table.transition(0, 0).unwrap(), Some(1));
/// assert_eq!(table.transition(2, 0).unwrap(), None);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable {
    states: Vec<State>,
    symbol_count: usize,
    grid: Vec<Option<StateId>>,
    start: Option<StateId>,
}

impl TransitionTable {
    /// Allocate a table of `state_count` states over an alphabet of
    /// `symbol_count` symbols.
    ///
    /// Every state starts out `Normal` with no action, every cell is empty,
    /// and no start state is recorded.
    pub fn new(state_count: usize, symbol_count: usize) -> Result<Self, TableError> {
        if state_count == 0 || symbol_count == 0 {
            return Err(TableError::EmptyDimension {
                states: state_count,
                symbols: symbol_count,
            });
        }

        let alloc_err = || TableError::Allocation {
            states: state_count,
            symbols: symbol_count,
        };
        let cells = state_count.checked_mul(symbol_count).ok_or_else(alloc_err)?;

        let mut states = Vec::new();
        states
            .try_reserve_exact(state_count)
            .map_err(|_| alloc_err())?;
        states.extend((0..state_count).map(State::new));

        let mut grid = Vec::new();
        grid.try_reserve_exact(cells).map_err(|_| alloc_err())?;
        grid.resize(cells, None);

        tracing::debug!(
            "allocated transition table: {} states, {} symbols",
            state_count,
            symbol_count
        );

        Ok(Self {
            states,
            symbol_count,
            grid,
            start: None,
        })
    }

    /// Number of states, fixed at construction.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Size of the input alphabet, fixed at construction.
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// The recorded start state, if any state was configured as `Start`.
    pub fn start(&self) -> Option<StateId> {
        self.start
    }

    pub fn start_state(&self) -> Option<&State> {
        self.start.map(|id| &self.states[id])
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, state: StateId) -> Result<&State, TableError> {
        self.check_state(state)?;
        Ok(&self.states[state])
    }

    /// Ids of every state designated `Accept`, in ascending order.
    pub fn accept_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().filter(|s| s.is_accept()).map(State::id)
    }

    /// Overwrite a state's designation and action.
    ///
    /// Configuring a state as `Start` repoints the table's start to it; the
    /// previous start keeps its `Start` tag but is no longer where
    /// interpreters begin.
    pub fn configure_state(
        &mut self,
        state: StateId,
        designation: Designation,
        action: Option<Action>,
    ) -> Result<(), TableError> {
        self.check_state(state)?;

        self.states[state].configure(designation, action);
        if designation.is_start() {
            if let Some(previous) = self.start.filter(|&prev| prev != state) {
                tracing::debug!("start state moved from {} to {}", previous, state);
            }
            self.start = Some(state);
        }

        tracing::debug!("configured state {} as {}", state, designation);
        Ok(())
    }

    /// Set cell `(from, symbol)` to `to`, replacing any existing transition.
    pub fn add_transition(
        &mut self,
        from: StateId,
        to: StateId,
        symbol: Symbol,
    ) -> Result<(), TableError> {
        self.check_state(from)?;
        self.check_state(to)?;
        self.check_symbol(symbol)?;

        let cell = self.cell(from, symbol);
        self.grid[cell] = Some(to);

        tracing::trace!("transition {} --{}--> {}", from, symbol, to);
        Ok(())
    }

    /// Clear cell `(from, symbol)`. Succeeds whether or not it was set.
    pub fn remove_transition(&mut self, from: StateId, symbol: Symbol) -> Result<(), TableError> {
        self.check_state(from)?;
        self.check_symbol(symbol)?;

        let cell = self.cell(from, symbol);
        self.grid[cell] = None;

        tracing::trace!("transition {} --{}--> removed", from, symbol);
        Ok(())
    }

    /// Look up the destination of `(from, symbol)`.
    ///
    /// `Ok(None)` means the pair is valid but has no transition.
    pub fn transition(&self, from: StateId, symbol: Symbol) -> Result<Option<StateId>, TableError> {
        self.check_state(from)?;
        self.check_symbol(symbol)?;
        Ok(self.grid[self.cell(from, symbol)])
    }

    /// All cells of one state's row, indexed by symbol.
    pub fn row(&self, from: StateId) -> Result<&[Option<StateId>], TableError> {
        self.check_state(from)?;
        let begin = from * self.symbol_count;
        Ok(&self.grid[begin..begin + self.symbol_count])
    }

    /// Render the grid for diagnostics.
    ///
    /// Symbols run across the top, states down the left; empty cells show
    /// `.`. The output is meant for humans and has no stable format.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn cell(&self, from: StateId, symbol: Symbol) -> usize {
        from * self.symbol_count + symbol
    }

    fn check_state(&self, state: StateId) -> Result<(), TableError> {
        if state >= self.states.len() {
            return Err(TableError::NoSuchState {
                state,
                state_count: self.states.len(),
            });
        }
        Ok(())
    }

    fn check_symbol(&self, symbol: Symbol) -> Result<(), TableError> {
        if symbol >= self.symbol_count {
            return Err(TableError::SymbolOutOfRange {
                symbol,
                symbol_count: self.symbol_count,
            });
        }
        Ok(())
    }
}

impl fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let largest = self.states.len().max(self.symbol_count) - 1;
        let w = largest.to_string().len();

        write!(f, "{}", "_".repeat(w + 2))?;
        for symbol in 0..self.symbol_count {
            write!(f, "|_{symbol:_>w$}_")?;
        }
        writeln!(f)?;

        for (state, row) in self.states.iter().zip(self.grid.chunks(self.symbol_count)) {
            write!(f, " {:>w$} ", state.id())?;
            for cell in row {
                match cell {
                    Some(to) => write!(f, "| {to:>w$} ")?,
                    None => write!(f, "| {:>w$} ", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cyclic() -> TransitionTable {
        let mut table = TransitionTable::new(3, 1).unwrap();
        table.configure_state(0, Designation::Start, None).unwrap();
        table.configure_state(2, Designation::Accept, None).unwrap();
        table.add_transition(0, 1, 0).unwrap();
        table.add_transition(1, 2, 0).unwrap();
        table.add_transition(2, 0, 0).unwrap();
        table
    }

    #[test]
    fn new_table_is_empty_and_normal() {
        let table = TransitionTable::new(4, 3).unwrap();

        assert_eq!(table.state_count(), 4);
        assert_eq!(table.symbol_count(), 3);
        assert_eq!(table.start(), None);
        for (i, state) in table.states().iter().enumerate() {
            assert_eq!(state.id(), i);
            assert_eq!(state.designation(), Designation::Normal);
            assert!(state.action().is_none());
            assert!(table.row(i).unwrap().iter().all(Option::is_none));
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            TransitionTable::new(0, 2),
            Err(TableError::EmptyDimension { states: 0, symbols: 2 })
        ));
        assert!(matches!(
            TransitionTable::new(2, 0),
            Err(TableError::EmptyDimension { states: 2, symbols: 0 })
        ));
    }

    #[test]
    fn overflowing_dimensions_report_allocation_failure() {
        let result = TransitionTable::new(usize::MAX, 2);
        assert!(matches!(result, Err(TableError::Allocation { .. })));
    }

    #[test]
    fn last_start_wins() {
        let mut table = TransitionTable::new(3, 1).unwrap();
        table.configure_state(0, Designation::Start, None).unwrap();
        table.configure_state(2, Designation::Start, None).unwrap();

        assert_eq!(table.start(), Some(2));
        assert_eq!(table.start_state().unwrap().id(), 2);
        // the earlier holder keeps its tag
        assert_eq!(table.state(0).unwrap().designation(), Designation::Start);
    }

    #[test]
    fn reconfiguring_start_as_normal_keeps_start_pointer() {
        let mut table = TransitionTable::new(2, 1).unwrap();
        table.configure_state(1, Designation::Start, None).unwrap();
        table.configure_state(1, Designation::Normal, None).unwrap();

        assert_eq!(table.start(), Some(1));
    }

    #[test]
    fn configure_unknown_state_fails_without_change() {
        let mut table = TransitionTable::new(2, 1).unwrap();
        let result = table.configure_state(2, Designation::Start, None);

        assert_eq!(
            result,
            Err(TableError::NoSuchState {
                state: 2,
                state_count: 2
            })
        );
        assert_eq!(table.start(), None);
    }

    #[test]
    fn add_transition_overwrites() {
        let mut table = TransitionTable::new(3, 2).unwrap();
        table.add_transition(0, 1, 1).unwrap();
        table.add_transition(0, 2, 1).unwrap();

        assert_eq!(table.transition(0, 1).unwrap(), Some(2));
        assert_eq!(table.transition(0, 0).unwrap(), None);
    }

    #[test]
    fn add_transition_validates_every_index() {
        let mut table = TransitionTable::new(2, 2).unwrap();

        assert!(matches!(
            table.add_transition(2, 0, 0),
            Err(TableError::NoSuchState { state: 2, .. })
        ));
        assert!(matches!(
            table.add_transition(0, 5, 0),
            Err(TableError::NoSuchState { state: 5, .. })
        ));
        assert!(matches!(
            table.add_transition(0, 1, 2),
            Err(TableError::SymbolOutOfRange { symbol: 2, .. })
        ));
        assert!(table.row(0).unwrap().iter().all(Option::is_none));
    }

    #[test]
    fn remove_transition_is_idempotent() {
        let mut table = TransitionTable::new(2, 1).unwrap();
        table.add_transition(0, 1, 0).unwrap();

        table.remove_transition(0, 0).unwrap();
        assert_eq!(table.transition(0, 0).unwrap(), None);
        table.remove_transition(0, 0).unwrap();
        assert_eq!(table.transition(0, 0).unwrap(), None);
    }

    #[test]
    fn remove_transition_validates_indices() {
        let mut table = TransitionTable::new(2, 1).unwrap();
        table.add_transition(1, 0, 0).unwrap();

        assert!(table.remove_transition(2, 0).is_err());
        assert!(table.remove_transition(1, 1).is_err());
        assert_eq!(table.transition(1, 0).unwrap(), Some(0));
    }

    #[test]
    fn accept_states_are_listed() {
        let mut table = TransitionTable::new(4, 1).unwrap();
        table.configure_state(1, Designation::Accept, None).unwrap();
        table.configure_state(3, Designation::Accept, None).unwrap();

        assert_eq!(table.accept_states().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn render_shows_destinations_and_placeholders() {
        let mut table = cyclic();
        table.remove_transition(2, 0).unwrap();

        assert_eq!(table.render(), "___|_0_\n 0 | 1 \n 1 | 2 \n 2 | . \n");
    }

    #[test]
    fn render_pads_wide_indices() {
        let mut table = TransitionTable::new(11, 2).unwrap();
        table.add_transition(10, 3, 1).unwrap();

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "____|__0_|__1_");
        assert_eq!(lines[11], " 10 |  . |  3 ");
        assert_eq!(lines.len(), 12);
    }
}
