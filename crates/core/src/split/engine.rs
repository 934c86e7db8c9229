//! Split engine.
//!
//! Both variants floor each person's share to the rounding unit first:
//! 1. `base = floor(total / count / unit) * unit`
//! 2. `remainder = total - base * count`
//!
//! and then differ only in who pays the remainder.

use rust_decimal::Decimal;

use super::types::{RoundingUnit, SingleAbsorberResult, SplitResult};

/// Engine for computing split results.
pub struct SplitEngine;

impl SplitEngine {
    /// Floor-rounded share per person.
    ///
    /// Divides once by `count * unit`, then floors. `Decimal` division keeps
    /// 28 significant digits, so a quotient just below a whole number can
    /// round up to it; the result is stepped back down until
    /// `base * count <= total`.
    #[must_use]
    pub fn base_share(total: Decimal, count: usize, rounding_unit: RoundingUnit) -> Decimal {
        if count == 0 {
            return Decimal::ZERO;
        }
        let unit = rounding_unit.as_decimal();
        let divisor = Decimal::from(count) * unit;

        let mut units = (total / divisor).floor();
        while units
            .checked_mul(divisor)
            .is_some_and(|covered| covered > total)
        {
            units -= Decimal::ONE;
        }
        units * unit
    }

    /// Multi-payer split.
    ///
    /// The first `min(extra_payer_count, selected_count)` selected
    /// participants each pay `ceil(remainder / payers)` on top of the base.
    /// Returns the all-zero result when `selected_count` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use dutchpay_core::split::{RoundingUnit, SplitEngine};
    ///
    /// let result = SplitEngine::compute_split(dec!(10000), 3, RoundingUnit::Hundred, 2);
    /// assert_eq!(result.base_amount, dec!(3300));
    /// assert_eq!(result.remainder, dec!(100));
    /// assert_eq!(result.extra_per_person, dec!(50));
    /// assert_eq!(result.extra_payers, 2);
    /// ```
    #[must_use]
    pub fn compute_split(
        total: Decimal,
        selected_count: usize,
        rounding_unit: RoundingUnit,
        extra_payer_count: usize,
    ) -> SplitResult {
        if selected_count == 0 {
            return SplitResult::default();
        }

        let extra_payers = extra_payer_count.min(selected_count);
        let base_amount = Self::base_share(total, selected_count, rounding_unit);
        let remainder = total - base_amount * Decimal::from(selected_count);

        // Ceiling can overshoot the remainder by up to `extra_payers - 1`.
        let extra_per_person = if extra_payers > 0 {
            (remainder / Decimal::from(extra_payers)).ceil()
        } else {
            Decimal::ZERO
        };

        SplitResult {
            base_amount,
            remainder,
            extra_per_person,
            extra_payers,
        }
    }

    /// Multi-payer split over an optional (possibly unparseable) total.
    ///
    /// A missing total yields the all-zero result.
    #[must_use]
    pub fn compute_optional(
        total: Option<Decimal>,
        selected_count: usize,
        rounding_unit: RoundingUnit,
        extra_payer_count: usize,
    ) -> SplitResult {
        total.map_or_else(SplitResult::default, |total| {
            Self::compute_split(total, selected_count, rounding_unit, extra_payer_count)
        })
    }

    /// Single-absorber split.
    ///
    /// One person pays `base + remainder`, everyone else pays `base`.
    /// Returns the all-zero result when `people_count` is 0.
    #[must_use]
    pub fn compute_single_absorber(
        total: Decimal,
        people_count: u32,
        rounding_unit: RoundingUnit,
    ) -> SingleAbsorberResult {
        if people_count == 0 {
            return SingleAbsorberResult::default();
        }

        let count = people_count as usize;
        let base_amount = Self::base_share(total, count, rounding_unit);
        let remainder = total - base_amount * Decimal::from(people_count);

        SingleAbsorberResult {
            base_amount,
            remainder,
            absorber_total: base_amount + remainder,
            people_count,
        }
    }
}
