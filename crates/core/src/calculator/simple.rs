//! Single-absorber calculator state.
//!
//! A two-number form: a total and a people count. The first person pays the
//! whole remainder on top of the base share.

use rust_decimal::Decimal;

use dutchpay_shared::config::MAX_PEOPLE;

use super::defaults::CalculatorDefaults;
use super::report::{SimpleReport, SimpleShareLine};
use crate::split::{
    RoundingUnit, SingleAbsorberResult, SplitEngine, parse_amount, parse_people_count,
};

/// Lowest count the decrement button reaches.
pub const DECREMENT_FLOOR: u32 = 2;

/// Field the presentation layer should move input focus to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The total-amount entry.
    TotalAmount,
}

/// A user event on the single-absorber form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleAction {
    /// Replace the raw total text.
    SetTotal(String),
    /// Add one person, never going above `MAX_PEOPLE`.
    Increment,
    /// Remove one person, never going below [`DECREMENT_FLOOR`].
    Decrement,
    /// Direct numeric entry; clamped to `1..=MAX_PEOPLE`.
    SetPeopleCount(String),
    /// Choose the rounding unit.
    SetRoundingUnit(RoundingUnit),
    /// Return every input to its default and focus the total.
    Reset,
}

/// Single-absorber form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleCalculatorState {
    /// Raw total text as typed.
    pub total_input: String,
    /// Number of people.
    pub people_count: u32,
    /// Rounding unit.
    pub rounding_unit: RoundingUnit,
    /// Pending focus request; set by reset, cleared by the next action.
    pub focus: Option<FocusTarget>,
    /// Values restored on reset.
    pub defaults: CalculatorDefaults,
}

impl SimpleCalculatorState {
    /// Creates a fresh state from defaults.
    #[must_use]
    pub fn new(defaults: CalculatorDefaults) -> Self {
        Self {
            total_input: String::new(),
            people_count: defaults.people_count.clamp(1, MAX_PEOPLE),
            rounding_unit: defaults.rounding_unit,
            focus: None,
            defaults,
        }
    }

    /// Applies an action and returns the next state.
    #[must_use]
    pub fn reduce(&self, action: SimpleAction) -> Self {
        let base = Self {
            focus: None,
            ..self.clone()
        };

        match action {
            SimpleAction::SetTotal(raw) => Self {
                total_input: raw,
                ..base
            },
            SimpleAction::Increment => Self {
                people_count: self.people_count.saturating_add(1).min(MAX_PEOPLE),
                ..base
            },
            SimpleAction::Decrement if self.people_count > DECREMENT_FLOOR => Self {
                people_count: self.people_count - 1,
                ..base
            },
            SimpleAction::Decrement => base,
            SimpleAction::SetPeopleCount(raw) => Self {
                people_count: parse_people_count(&raw),
                ..base
            },
            SimpleAction::SetRoundingUnit(rounding_unit) => Self {
                rounding_unit,
                ..base
            },
            SimpleAction::Reset => Self {
                focus: Some(FocusTarget::TotalAmount),
                ..Self::new(self.defaults.clone())
            },
        }
    }

    /// Parsed total, if the raw text holds a number.
    #[must_use]
    pub fn total(&self) -> Option<Decimal> {
        parse_amount(&self.total_input)
    }

    /// Recomputes the split from the current inputs.
    #[must_use]
    pub fn split_result(&self) -> SingleAbsorberResult {
        self.total().map_or_else(SingleAbsorberResult::default, |total| {
            SplitEngine::compute_single_absorber(total, self.people_count, self.rounding_unit)
        })
    }

    /// Builds the full report for rendering.
    #[must_use]
    pub fn report(&self) -> SimpleReport {
        let total = self.total();
        let result = self.split_result();
        let has_result = total.is_some() && self.people_count > 0;

        let shares = if has_result {
            (0..self.people_count as usize)
                .map(|pos| SimpleShareLine {
                    position: pos + 1,
                    amount: result.amount_for(pos),
                    is_absorber: pos == 0 && result.has_absorber(),
                })
                .collect()
        } else {
            Vec::new()
        };

        SimpleReport {
            total,
            people_count: self.people_count,
            rounding_unit: self.rounding_unit,
            result,
            shares,
            has_result,
        }
    }
}

impl Default for SimpleCalculatorState {
    fn default() -> Self {
        Self::new(CalculatorDefaults::default())
    }
}
