//! Participant list.

pub mod types;

pub use types::{Participant, Roster};
