//! Checkpoint and resume functionality for interpreters.
//!
//! A checkpoint captures where an interpreter is (its cursor) and how it got
//! there (its step history), so a long-running driver loop can stop and
//! later pick up against the same table. The table itself (states, actions,
//! transitions) is not part of a checkpoint; the caller rebuilds it and
//! resuming checks that the checkpoint fits.

use crate::core::{RunHistory, StateId, TransitionTable};
use crate::interpreter::Interpreter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of an interpreter's position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Number of states in the table the interpreter ran on
    pub state_count: usize,

    /// Alphabet size of the table the interpreter ran on
    pub symbol_count: usize,

    /// State under the cursor
    pub cursor: StateId,

    /// Steps taken so far
    pub history: RunHistory,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Check that this checkpoint can be resumed against `table`.
    pub fn validate(&self, table: &TransitionTable) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if self.state_count != table.state_count() || self.symbol_count != table.symbol_count() {
            return Err(CheckpointError::DimensionMismatch {
                expected_states: self.state_count,
                expected_symbols: self.symbol_count,
                found_states: table.state_count(),
                found_symbols: table.symbol_count(),
            });
        }

        if self.cursor >= self.state_count {
            return Err(CheckpointError::ValidationFailed(format!(
                "cursor {} out of range for {} states",
                self.cursor, self.state_count
            )));
        }

        let bad_step = self.history.steps().position(|step| {
            step.from >= self.state_count
                || step.to >= self.state_count
                || step.symbol >= self.symbol_count
        });
        if let Some(index) = bad_step {
            return Err(CheckpointError::ValidationFailed(format!(
                "history step {index} references an index outside the table"
            )));
        }

        let broken_link = self
            .history
            .steps()
            .zip(self.history.steps().skip(1))
            .position(|(prev, next)| prev.to != next.from);
        if let Some(index) = broken_link {
            return Err(CheckpointError::ValidationFailed(format!(
                "history step {} does not start where step {index} ended",
                index + 1
            )));
        }

        // indices are in range here, so a lookup error cannot occur
        let foreign_step = self.history.steps().position(|step| {
            table.transition(step.from, step.symbol).ok().flatten() != Some(step.to)
        });
        if let Some(index) = foreign_step {
            return Err(CheckpointError::ValidationFailed(format!(
                "history step {index} is not a transition of the table"
            )));
        }

        if let Some(last) = self.history.last() {
            if last.to != self.cursor {
                return Err(CheckpointError::ValidationFailed(format!(
                    "history ends in state {} but cursor is {}",
                    last.to, self.cursor
                )));
            }
        }

        Ok(())
    }
}

impl<'t> Interpreter<'t> {
    /// Capture the cursor and history.
    pub fn checkpoint(&self) -> Checkpoint {
        let table = self.table();
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state_count: table.state_count(),
            symbol_count: table.symbol_count(),
            cursor: self.current_state(),
            history: self.history().clone(),
        }
    }

    /// Rebuild an interpreter on `table` from a checkpoint.
    ///
    /// The table need not have a start state; the cursor comes from the
    /// checkpoint.
    pub fn resume(
        table: &'t TransitionTable,
        checkpoint: &Checkpoint,
    ) -> Result<Self, CheckpointError> {
        checkpoint.validate(table)?;
        tracing::debug!(
            "resuming checkpoint {} at state {}",
            checkpoint.id,
            checkpoint.cursor
        );
        Ok(Interpreter::from_parts(
            table,
            checkpoint.cursor,
            checkpoint.history.clone(),
        ))
    }
}
