//! Split input errors.

use thiserror::Error;

/// Errors raised when converting raw choices into split inputs.
///
/// The arithmetic itself never fails; these only guard the enumerated
/// choices a presentation layer offers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// Rounding unit outside {100, 1000, 10000}.
    #[error("Unsupported rounding unit: {0} (expected 100, 1000 or 10000)")]
    UnsupportedRoundingUnit(String),

    /// Extra-payer choice outside {1, 2, 3, 4}.
    #[error("Unsupported extra payer count: {0} (expected 1 to 4)")]
    UnsupportedExtraPayers(usize),
}
