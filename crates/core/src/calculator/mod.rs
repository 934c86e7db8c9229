//! Calculator form state, reducer transitions and derived reports.
//!
//! The presentation layer owns one state value. Every user event becomes an
//! action, `reduce` returns the next state, and the report is recomputed from
//! scratch from that state. Nothing is cached between recomputations.

pub mod defaults;
pub mod report;
pub mod simple;
pub mod state;

#[cfg(test)]
mod props;

pub use defaults::CalculatorDefaults;
pub use report::{ExtraPayerChoice, RosterEntry, ShareLine, SimpleReport, SimpleShareLine, SplitReport};
pub use simple::{FocusTarget, SimpleAction, SimpleCalculatorState};
pub use state::{Action, CalculatorState};
