//! Split data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use dutchpay_shared::config::MAX_EXTRA_PAYERS;
use dutchpay_shared::types::Locale;

use super::error::SplitError;

/// Denomination that base shares are floored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum RoundingUnit {
    /// Nearest hundred.
    #[default]
    Hundred,
    /// Nearest thousand.
    Thousand,
    /// Nearest ten thousand.
    TenThousand,
}

impl RoundingUnit {
    /// Every unit in display order.
    pub const ALL: [Self; 3] = [Self::Hundred, Self::Thousand, Self::TenThousand];

    /// Returns the unit as an integer.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Hundred => 100,
            Self::Thousand => 1000,
            Self::TenThousand => 10000,
        }
    }

    /// Returns the unit as a decimal.
    #[must_use]
    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.value())
    }

    /// Returns the localized label for the unit.
    #[must_use]
    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ko, Self::Hundred) => "백원",
            (Locale::Ko, Self::Thousand) => "천원",
            (Locale::Ko, Self::TenThousand) => "만원",
            (Locale::En, Self::Hundred) => "hundred",
            (Locale::En, Self::Thousand) => "thousand",
            (Locale::En, Self::TenThousand) => "ten-thousand",
        }
    }
}

impl From<RoundingUnit> for u32 {
    fn from(unit: RoundingUnit) -> Self {
        unit.value()
    }
}

impl TryFrom<u32> for RoundingUnit {
    type Error = SplitError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            100 => Ok(Self::Hundred),
            1000 => Ok(Self::Thousand),
            10000 => Ok(Self::TenThousand),
            other => Err(SplitError::UnsupportedRoundingUnit(other.to_string())),
        }
    }
}

impl std::fmt::Display for RoundingUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl std::str::FromStr for RoundingUnit {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u32>()
            .map_err(|_| SplitError::UnsupportedRoundingUnit(trimmed.to_string()))
            .and_then(Self::try_from)
    }
}

/// Checks an extra-payer choice against the selectable range {1..4}.
///
/// # Errors
///
/// Returns `SplitError::UnsupportedExtraPayers` for 0 or anything above 4.
pub fn validate_extra_payer_choice(count: usize) -> Result<usize, SplitError> {
    if (1..=MAX_EXTRA_PAYERS).contains(&count) {
        Ok(count)
    } else {
        Err(SplitError::UnsupportedExtraPayers(count))
    }
}

/// Result of the multi-payer split.
///
/// All fields are zero when there is nothing to split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResult {
    /// Floor-rounded share every selected participant pays.
    pub base_amount: Decimal,
    /// Total minus all base shares.
    pub remainder: Decimal,
    /// Ceiling share of the remainder paid by each extra payer.
    pub extra_per_person: Decimal,
    /// Number of participants paying `extra_per_person` on top of the base.
    pub extra_payers: usize,
}

impl SplitResult {
    /// Returns true if nothing was computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base_amount.is_zero()
            && self.remainder.is_zero()
            && self.extra_per_person.is_zero()
            && self.extra_payers == 0
    }

    /// Whether the participant at `position` (among selected, in display
    /// order) is flagged as paying extra.
    #[must_use]
    pub fn pays_extra(&self, position: usize) -> bool {
        position < self.extra_payers && self.remainder > Decimal::ZERO
    }

    /// Amount owed by the participant at `position`.
    #[must_use]
    pub fn amount_for(&self, position: usize) -> Decimal {
        if position < self.extra_payers {
            self.base_amount + self.extra_per_person
        } else {
            self.base_amount
        }
    }

    /// Sum of all extra increments.
    #[must_use]
    pub fn total_extra(&self) -> Decimal {
        self.extra_per_person * Decimal::from(self.extra_payers)
    }

    /// `base_amount * selected_count + remainder`; equals the split total.
    #[must_use]
    pub fn reconstructed_total(&self, selected_count: usize) -> Decimal {
        self.base_amount * Decimal::from(selected_count) + self.remainder
    }

    /// What is actually collected when everyone pays their share.
    ///
    /// Exceeds the total when the remainder does not divide evenly among
    /// the extra payers.
    #[must_use]
    pub fn collected_total(&self, selected_count: usize) -> Decimal {
        self.base_amount * Decimal::from(selected_count) + self.total_extra()
    }
}

/// Result of the single-absorber split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleAbsorberResult {
    /// Floor-rounded share everyone pays.
    pub base_amount: Decimal,
    /// Total minus all base shares.
    pub remainder: Decimal,
    /// What the absorbing payer pays (`base_amount + remainder`).
    pub absorber_total: Decimal,
    /// Number of people splitting.
    pub people_count: u32,
}

impl SingleAbsorberResult {
    /// Whether anyone pays more than the base.
    #[must_use]
    pub fn has_absorber(&self) -> bool {
        self.remainder > Decimal::ZERO
    }

    /// Amount owed by the person at `position`; the first person absorbs.
    #[must_use]
    pub fn amount_for(&self, position: usize) -> Decimal {
        if position == 0 && self.has_absorber() {
            self.absorber_total
        } else {
            self.base_amount
        }
    }

    /// Per-person amounts, absorber first.
    #[must_use]
    pub fn shares(&self) -> Vec<Decimal> {
        (0..self.people_count as usize)
            .map(|i| self.amount_for(i))
            .collect()
    }
}
