//! Validation-based audit of configured transition tables.
//!
//! A table is legal as soon as it is constructed, but a table can still be
//! structurally suspect: no start, no accepting state, holes in the grid,
//! states nothing can reach. This module checks for those, using
//! Stillwater's `Validation` type so that every issue is reported in one
//! pass instead of stopping at the first.
//!
//! Audits are advisory. Nothing in [`crate::core`] or
//! [`crate::interpreter`] runs them; attach rules to a
//! [`TableBuilder`](crate::builder::TableBuilder) or call
//! [`AuditRules::check`] directly.
//!
//! # Example
//!
//! ```rust
//! use tablefsm::audit::AuditBuilder;
//! use tablefsm::core::TransitionTable;
//! use stillwater::validation::Validation;
//!
//! let table = TransitionTable::new(2, 1).unwrap();
//! let rules = AuditBuilder::new().require_start().require_accept().build();
//!
//! match rules.check(&table) {
//!     Validation::Failure(issues) => assert_eq!(issues.len(), 2),
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod builder;
pub mod issues;
pub mod rules;

pub use builder::AuditBuilder;
pub use issues::TableIssue;
pub use rules::{AuditCheck, AuditRules};
