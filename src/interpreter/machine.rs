//! Interpreter that drives a transition table symbol by symbol.

use crate::core::{RunHistory, State, StateId, StepRecord, Symbol, TransitionTable};
use crate::interpreter::outcome::{InterpreterError, Verdict};
use chrono::Utc;

/// Cursor over a borrowed [`TransitionTable`].
///
/// The table is shared read-only for as long as any interpreter exists, so
/// several interpreters (on one thread or many) may run the same table with
/// independent cursors.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::{Designation, TransitionTable};
/// use tablefsm::interpreter::{Interpreter, Verdict};
///
/// let mut table = TransitionTable::new(2, 2).unwrap();
/// table.configure_state(0, Designation::Start, None).unwrap();
/// table.configure_state(1, Designation::Accept, None).unwrap();
/// table.add_transition(0, 1, 1).unwrap();
/// table.add_transition(1, 0, 0).unwrap();
///
/// let mut interp = Interpreter::new(&table).unwrap();
/// assert_eq!(interp.run([1, 0, 1]).unwrap(), Verdict::Accepted);
/// assert_eq!(interp.history().path(), vec![0, 1, 0, 1]);
/// ```
#[derive(Debug)]
pub struct Interpreter<'t> {
    table: &'t TransitionTable,
    cursor: StateId,
    history: RunHistory,
}

impl<'t> Interpreter<'t> {
    /// Bind an interpreter to `table`, with the cursor on its start state.
    pub fn new(table: &'t TransitionTable) -> Result<Self, InterpreterError> {
        let start = table.start().ok_or(InterpreterError::NoStartState)?;
        Ok(Self {
            table,
            cursor: start,
            history: RunHistory::new(),
        })
    }

    pub(crate) fn from_parts(
        table: &'t TransitionTable,
        cursor: StateId,
        history: RunHistory,
    ) -> Self {
        Self {
            table,
            cursor,
            history,
        }
    }

    /// Keep at most `limit` steps of history, dropping the oldest first.
    ///
    /// A limit of zero turns recording off. Steps already recorded beyond
    /// the new limit are discarded.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        let mut history = RunHistory::with_limit(limit);
        for step in self.history.steps() {
            history.record(step.clone());
        }
        self.history = history;
        self
    }

    pub fn table(&self) -> &'t TransitionTable {
        self.table
    }

    /// Id of the state under the cursor.
    pub fn current_state(&self) -> StateId {
        self.cursor
    }

    pub fn current(&self) -> &'t State {
        &self.table.states()[self.cursor]
    }

    /// Check if the cursor rests on an `Accept` state.
    pub fn is_accepting(&self) -> bool {
        self.current().is_accept()
    }

    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    /// Move the cursor back to the table's start state and forget history.
    pub fn reset(&mut self) -> Result<(), InterpreterError> {
        self.cursor = self.table.start().ok_or(InterpreterError::NoStartState)?;
        self.history.clear();
        Ok(())
    }

    /// Run the action of the state under the cursor, if it has one.
    pub fn run_current_action(&self) {
        self.current().run_action();
    }

    /// Consume one symbol.
    ///
    /// On success the cursor moves to the destination and its id is
    /// returned. On error the cursor does not move. The destination's action
    /// is not run; [`run`](Self::run) does that.
    pub fn step(&mut self, symbol: Symbol) -> Result<StateId, InterpreterError> {
        let symbol_count = self.table.symbol_count();
        if symbol >= symbol_count {
            return Err(InterpreterError::InvalidSymbol {
                symbol,
                symbol_count,
            });
        }

        let from = self.cursor;
        let Some(to) = self.table.transition(from, symbol)? else {
            tracing::warn!(
                "no transition out of state {} on symbol {}",
                from,
                symbol
            );
            tracing::debug!("transition table:\n{}", self.table.render());
            return Err(InterpreterError::UndefinedTransition {
                state: from,
                symbol,
            });
        };

        tracing::trace!("step {} --{}--> {}", from, symbol, to);
        if self.history.is_recording() {
            self.history.record(StepRecord {
                from,
                symbol,
                to,
                timestamp: Utc::now(),
            });
        }
        self.cursor = to;
        Ok(to)
    }

    /// Run a whole input sequence.
    ///
    /// Runs the current state's action once, then for each symbol steps and
    /// runs the new state's action. The first error stops the run and is
    /// returned; steps already taken are kept. An empty sequence yields the
    /// verdict of the state the cursor started on.
    pub fn run<I>(&mut self, symbols: I) -> Result<Verdict, InterpreterError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        self.run_current_action();
        for symbol in symbols {
            self.step(symbol)?;
            self.run_current_action();
        }

        let verdict = Verdict::from_designation(self.current().designation());
        tracing::debug!("run ended in state {}: {:?}", self.cursor, verdict);
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Designation, DEFAULT_HISTORY_LIMIT};
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<&'static str>>>;

    fn logging(log: &Log, word: &'static str) -> Option<Action> {
        let sink = Arc::clone(log);
        Some(Action::new(move || sink.lock().unwrap().push(word)))
    }

    fn traffic_light(log: &Log) -> TransitionTable {
        let mut table = TransitionTable::new(3, 1).unwrap();
        table
            .configure_state(0, Designation::Start, logging(log, "green"))
            .unwrap();
        table
            .configure_state(1, Designation::Normal, logging(log, "yellow"))
            .unwrap();
        table
            .configure_state(2, Designation::Accept, logging(log, "red"))
            .unwrap();
        table.add_transition(0, 1, 0).unwrap();
        table.add_transition(1, 2, 0).unwrap();
        table.add_transition(2, 0, 0).unwrap();
        table
    }

    #[test]
    fn new_requires_start_state() {
        let table = TransitionTable::new(3, 2).unwrap();
        assert_eq!(
            Interpreter::new(&table).unwrap_err(),
            InterpreterError::NoStartState
        );
    }

    #[test]
    fn new_places_cursor_on_latest_start() {
        let mut table = TransitionTable::new(3, 1).unwrap();
        table.configure_state(0, Designation::Start, None).unwrap();
        table.configure_state(1, Designation::Start, None).unwrap();

        let interp = Interpreter::new(&table).unwrap();
        assert_eq!(interp.current_state(), 1);
        assert!(interp.history().is_empty());
    }

    #[test]
    fn step_moves_cursor() {
        let log = Log::default();
        let table = traffic_light(&log);
        let mut interp = Interpreter::new(&table).unwrap();

        assert_eq!(interp.step(0).unwrap(), 1);
        assert_eq!(interp.current_state(), 1);
        assert_eq!(interp.step(0).unwrap(), 2);
        assert!(interp.is_accepting());
        // step alone never runs actions
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn invalid_symbol_leaves_cursor() {
        let log = Log::default();
        let table = traffic_light(&log);
        let mut interp = Interpreter::new(&table).unwrap();

        assert_eq!(
            interp.step(1).unwrap_err(),
            InterpreterError::InvalidSymbol {
                symbol: 1,
                symbol_count: 1
            }
        );
        assert_eq!(interp.current_state(), 0);
        assert!(interp.history().is_empty());
    }

    #[test]
    fn undefined_transition_leaves_cursor() {
        let log = Log::default();
        let mut table = traffic_light(&log);
        table.remove_transition(1, 0).unwrap();
        let mut interp = Interpreter::new(&table).unwrap();

        interp.step(0).unwrap();
        assert_eq!(
            interp.step(0).unwrap_err(),
            InterpreterError::UndefinedTransition {
                state: 1,
                symbol: 0
            }
        );
        assert_eq!(interp.current_state(), 1);
        assert_eq!(interp.history().len(), 1);
    }

    #[test]
    fn run_current_action_is_noop_without_action() {
        let mut table = TransitionTable::new(1, 1).unwrap();
        table.configure_state(0, Designation::Start, None).unwrap();
        let interp = Interpreter::new(&table).unwrap();

        interp.run_current_action();
        assert_eq!(interp.current_state(), 0);
    }

    #[test]
    fn run_executes_actions_in_order() {
        let log = Log::default();
        let table = traffic_light(&log);
        let mut interp = Interpreter::new(&table).unwrap();

        let verdict = interp.run([0, 0]).unwrap();

        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(*log.lock().unwrap(), vec!["green", "yellow", "red"]);
        assert_eq!(interp.history().path(), vec![0, 1, 2]);
    }

    #[test]
    fn run_halts_on_first_error() {
        let log = Log::default();
        let table = traffic_light(&log);
        let mut interp = Interpreter::new(&table).unwrap();

        let result = interp.run([0, 3, 0]);

        assert!(matches!(
            result,
            Err(InterpreterError::InvalidSymbol { symbol: 3, .. })
        ));
        assert_eq!(interp.current_state(), 1);
        assert_eq!(*log.lock().unwrap(), vec!["green", "yellow"]);
    }

    #[test]
    fn empty_run_reports_start_designation() {
        let log = Log::default();
        let table = traffic_light(&log);
        let mut interp = Interpreter::new(&table).unwrap();

        assert_eq!(interp.run(std::iter::empty()).unwrap(), Verdict::NotAccepted);
        assert_eq!(*log.lock().unwrap(), vec!["green"]);
    }

    #[test]
    fn run_continues_from_current_cursor() {
        let log = Log::default();
        let table = traffic_light(&log);
        let mut interp = Interpreter::new(&table).unwrap();

        assert_eq!(interp.run([0]).unwrap(), Verdict::NotAccepted);
        assert_eq!(interp.run([0]).unwrap(), Verdict::Accepted);
        assert_eq!(interp.history().path(), vec![0, 1, 2]);
    }

    #[test]
    fn reset_returns_to_start() {
        let log = Log::default();
        let table = traffic_light(&log);
        let mut interp = Interpreter::new(&table).unwrap();

        interp.run([0, 0]).unwrap();
        interp.reset().unwrap();

        assert_eq!(interp.current_state(), 0);
        assert!(interp.history().is_empty());
    }

    #[test]
    fn history_stays_bounded_over_long_runs() {
        let table = crate::builder::cycle(3, 1, 0).unwrap();
        let mut interp = Interpreter::new(&table).unwrap().with_history_limit(16);

        for _ in 0..100_000 {
            interp.run([0]).unwrap();
        }

        assert_eq!(interp.history().len(), 16);
        assert_eq!(interp.history().last().map(|s| s.to), Some(100_000 % 3));
        assert_eq!(interp.current_state(), 100_000 % 3);
    }

    #[test]
    fn default_history_is_bounded() {
        let log = Log::default();
        let table = traffic_light(&log);
        let mut interp = Interpreter::new(&table).unwrap();

        interp
            .run(std::iter::repeat(0).take(DEFAULT_HISTORY_LIMIT * 2 + 1))
            .unwrap();

        assert_eq!(interp.history().len(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn zero_history_limit_disables_recording() {
        let log = Log::default();
        let table = traffic_light(&log);
        let mut interp = Interpreter::new(&table).unwrap().with_history_limit(0);

        assert_eq!(interp.run([0, 0]).unwrap(), Verdict::Accepted);
        assert!(interp.history().is_empty());
    }

    #[test]
    fn shrinking_limit_keeps_latest_steps() {
        let log = Log::default();
        let table = traffic_light(&log);
        let mut interp = Interpreter::new(&table).unwrap();
        interp.run([0, 0, 0]).unwrap();

        let interp = interp.with_history_limit(1);

        assert_eq!(interp.history().path(), vec![2, 0]);
    }
}
