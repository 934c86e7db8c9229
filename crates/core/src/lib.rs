//! Core logic for the Dutch pay calculator.
//!
//! This crate contains pure calculation and state logic with ZERO terminal or
//! I/O dependencies. The presentation layer owns a state value, feeds it
//! actions, and renders the report derived from it after every change.
//!
//! # Modules
//!
//! - `split` - Rounding and remainder-distribution arithmetic
//! - `roster` - Participant list
//! - `calculator` - Form state, reducer transitions and derived reports

pub mod calculator;
pub mod roster;
pub mod split;
