//! Rounding and remainder-distribution arithmetic.
//!
//! Two variants share the same base-share rule:
//! - multi-payer: the remainder is split by ceiling division across the
//!   first N selected participants
//! - single absorber: one person pays the whole remainder on top of the base

pub mod engine;
pub mod error;
pub mod input;
pub mod types;

#[cfg(test)]
mod props;

pub use engine::SplitEngine;
pub use error::SplitError;
pub use input::{parse_amount, parse_people_count};
pub use types::{RoundingUnit, SingleAbsorberResult, SplitResult};
