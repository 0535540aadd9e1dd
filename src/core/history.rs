//! Step history of an interpreter.
//!
//! Successful steps are recorded in order, so a run can be inspected or
//! checkpointed after the fact. The history keeps at most `limit` steps and
//! drops the oldest first, so a driver loop that never resets does not grow
//! without bound. A limit of zero turns recording off.

use super::state::{StateId, Symbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of steps kept by [`RunHistory::new`].
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Record of a single successful step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// The state the cursor left
    pub from: StateId,
    /// The symbol consumed
    pub symbol: Symbol,
    /// The state the cursor moved to
    pub to: StateId,
    /// When the step happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of steps taken by one interpreter.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::{RunHistory, StepRecord};
/// use chrono::Utc;
///
/// let mut history = RunHistory::new();
/// history.record(StepRecord { from: 0, symbol: 0, to: 1, timestamp: Utc::now() });
/// history.record(StepRecord { from: 1, symbol: 0, to: 2, timestamp: Utc::now() });
///
/// assert_eq!(history.path(), vec![0, 1, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunHistory {
    steps: VecDeque<StepRecord>,
    limit: usize,
}

impl RunHistory {
    /// History keeping the latest [`DEFAULT_HISTORY_LIMIT`] steps.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// History keeping the latest `limit` steps. Zero records nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            steps: VecDeque::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Check if steps are being kept at all.
    pub fn is_recording(&self) -> bool {
        self.limit > 0
    }

    /// Append a step, evicting the oldest once the limit is reached.
    pub fn record(&mut self, step: StepRecord) {
        if !self.is_recording() {
            return;
        }
        while self.steps.len() >= self.limit {
            self.steps.pop_front();
        }
        self.steps.push_back(step);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest kept step, then the `to` state
    /// of every kept step. Empty if nothing was recorded.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.front() {
            path.push(first.from);
        }
        path.extend(self.steps.iter().map(|step| step.to));
        path
    }

    /// Symbols consumed, in order.
    pub fn symbols(&self) -> Vec<Symbol> {
        self.steps.iter().map(|step| step.symbol).collect()
    }

    /// Time between the first and last step.
    ///
    /// Returns `None` if there are no steps.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.steps.front()?, self.steps.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Kept steps, oldest first.
    pub fn steps(&self) -> impl ExactSizeIterator<Item = &StepRecord> + '_ {
        self.steps.iter()
    }

    pub fn last(&self) -> Option<&StepRecord> {
        self.steps.back()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Forget every step. The limit is kept.
    pub fn clear(&mut self) {
        self.steps.clear();
    }
}

impl Default for RunHistory {
    fn default() -> Self {
        Self::new()
    }
}
