//! Tablefsm: a table-driven finite state machine engine
//!
//! A machine is a dense `states × symbols` transition table. States and
//! symbols are zero-based indices fixed when the table is built, so every
//! lookup is a bounds check and one vector index. An interpreter borrows a
//! configured table, walks it symbol by symbol, runs each state's action, and
//! reports whether a run ended in an accepting state.
//!
//! # Core Concepts
//!
//! - **Transition table**: states with Start/Accept/Normal designations and
//!   optional actions, plus the transition grid
//! - **Interpreter**: a cursor into a table with single-step and whole-run
//!   execution
//! - **Builder**: fluent and macro-based table configuration
//! - **Audit**: structural checks that report every issue at once
//! - **Checkpoint**: serializable interpreter position for resuming later
//!
//! # Example
//!
//! ```rust
//! use tablefsm::core::{Action, Designation, TransitionTable};
//! use tablefsm::interpreter::{Interpreter, Verdict};
//!
//! let mut table = TransitionTable::new(3, 1).unwrap();
//! table
//!     .configure_state(0, Designation::Start, Some(Action::new(|| println!("Green"))))
//!     .unwrap();
//! table
//!     .configure_state(1, Designation::Normal, Some(Action::new(|| println!("Yellow"))))
//!     .unwrap();
//! table
//!     .configure_state(2, Designation::Accept, Some(Action::new(|| println!("Red"))))
//!     .unwrap();
//! table.add_transition(0, 1, 0).unwrap();
//! table.add_transition(1, 2, 0).unwrap();
//! table.add_transition(2, 0, 0).unwrap();
//!
//! let mut interp = Interpreter::new(&table).unwrap();
//! assert_eq!(interp.run([0, 0]).unwrap(), Verdict::Accepted);
//! ```

pub mod audit;
pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod interpreter;

// Re-export commonly used types
pub use crate::builder::{BuildError, TableBuilder};
pub use crate::checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{Action, Designation, StateId, Symbol, TableError, TransitionTable};
pub use crate::interpreter::{Interpreter, InterpreterError, Verdict};
