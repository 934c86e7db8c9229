//! Property-based tests for split arithmetic.
//!
//! - Base share is a non-negative multiple of the unit, never above the
//!   per-person share
//! - Exact partition: `base * selected + remainder == total`
//! - Ceiling distribution covers the remainder
//! - Extra payers are clamped to the selected count
//! - Single absorber pays the whole remainder
//! - Recomputation is deterministic

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::SplitEngine;
use super::types::RoundingUnit;

/// Strategy to generate whole-unit totals (0 to 100,000,000).
fn whole_total() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(Decimal::from)
}

/// Strategy to generate totals with up to 2 decimal places.
fn fractional_total() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a rounding unit.
fn rounding_unit() -> impl Strategy<Value = RoundingUnit> {
    prop::sample::select(RoundingUnit::ALL.to_vec())
}

/// Strategy to generate a selected count (1 to 50).
fn selected_count() -> impl Strategy<Value = usize> {
    1usize..50
}

/// Strategy to generate a requested extra-payer count (0 to 8).
fn extra_payer_count() -> impl Strategy<Value = usize> {
    0usize..=8
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Base amount is a non-negative multiple of the unit and does not exceed
    /// the exact per-person share.
    #[test]
    fn prop_base_is_floored_multiple(
        total in fractional_total(),
        count in selected_count(),
        unit in rounding_unit(),
        extra in extra_payer_count(),
    ) {
        let result = SplitEngine::compute_split(total, count, unit, extra);
        let unit_dec = unit.as_decimal();

        prop_assert!(result.base_amount >= Decimal::ZERO);
        prop_assert!((result.base_amount % unit_dec).is_zero());
        prop_assert!(result.base_amount * Decimal::from(count) <= total);
        // One more unit per person would overshoot.
        prop_assert!((result.base_amount + unit_dec) * Decimal::from(count) > total);
    }

    /// Exact partition: base * selected + remainder == total.
    #[test]
    fn prop_exact_partition(
        total in fractional_total(),
        count in selected_count(),
        unit in rounding_unit(),
        extra in extra_payer_count(),
    ) {
        let result = SplitEngine::compute_split(total, count, unit, extra);
        prop_assert_eq!(result.reconstructed_total(count), total);
        prop_assert!(result.remainder >= Decimal::ZERO);
    }

    /// Ceiling distribution covers the remainder, exactly iff it divides evenly.
    #[test]
    fn prop_extra_covers_remainder(
        total in whole_total(),
        count in selected_count(),
        unit in rounding_unit(),
        extra in 1usize..=4,
    ) {
        let result = SplitEngine::compute_split(total, count, unit, extra);
        let payers = Decimal::from(result.extra_payers);
        let distributed = result.extra_per_person * payers;

        prop_assert!(distributed >= result.remainder);
        let divides_evenly = (result.remainder % payers).is_zero();
        prop_assert_eq!(distributed == result.remainder, divides_evenly);
        // Surplus is bounded by payers - 1 for whole totals.
        prop_assert!(distributed - result.remainder < payers);
    }

    /// Effective extra payers is min(requested, selected).
    #[test]
    fn prop_extra_payers_clamped(
        total in whole_total(),
        count in selected_count(),
        unit in rounding_unit(),
        extra in extra_payer_count(),
    ) {
        let result = SplitEngine::compute_split(total, count, unit, extra);
        prop_assert_eq!(result.extra_payers, extra.min(count));
    }

    /// Single absorber: nobody pays extra without a remainder, otherwise
    /// exactly one person pays base + remainder.
    #[test]
    fn prop_single_absorber(
        total in whole_total(),
        people in 1u32..50,
        unit in rounding_unit(),
    ) {
        let result = SplitEngine::compute_single_absorber(total, people, unit);
        let shares = result.shares();

        prop_assert_eq!(shares.len(), people as usize);
        prop_assert_eq!(shares.iter().copied().sum::<Decimal>(), total);

        let above_base = shares.iter().filter(|s| **s > result.base_amount).count();
        if result.remainder.is_zero() {
            prop_assert_eq!(above_base, 0);
        } else {
            prop_assert_eq!(above_base, 1);
            prop_assert_eq!(shares[0], result.base_amount + result.remainder);
            prop_assert!(shares[1..].iter().all(|s| *s == result.base_amount));
        }
    }

    /// Same inputs, same result.
    #[test]
    fn prop_deterministic(
        total in fractional_total(),
        count in selected_count(),
        unit in rounding_unit(),
        extra in extra_payer_count(),
    ) {
        let first = SplitEngine::compute_split(total, count, unit, extra);
        let second = SplitEngine::compute_split(total, count, unit, extra);
        prop_assert_eq!(first, second);
    }
}
