//! One-shot requests from command-line arguments.
//!
//! A request is turned into the same action sequence the interactive form
//! would produce, so both paths share the reducer.

use dutchpay_core::calculator::{
    Action, CalculatorDefaults, CalculatorState, SimpleAction, SimpleCalculatorState,
};
use dutchpay_core::split::RoundingUnit;
use dutchpay_core::split::types::validate_extra_payer_choice;
use dutchpay_shared::config::MAX_PEOPLE;
use dutchpay_shared::{AppError, AppResult};

/// Multi-payer split request.
#[derive(Debug, Clone, Default)]
pub struct SplitRequest {
    /// Raw total text.
    pub total: String,
    /// Participant names in display order; empty means default names.
    pub names: Vec<String>,
    /// Number of default-named participants when `names` is empty.
    pub count: Option<usize>,
    /// Names or IDs of participants left out of the split.
    pub exclude: Vec<String>,
    /// Rounding unit override.
    pub rounding_unit: Option<RoundingUnit>,
    /// Extra payer override.
    pub extra_payers: Option<usize>,
}

impl SplitRequest {
    /// Builds the calculator state for this request.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for an unknown excluded participant or
    /// an extra-payer count outside 1-4, and `AppError::Validation` for a
    /// participant count outside `1..=MAX_PEOPLE` or when the extra payers
    /// exceed the participants left in the split.
    pub fn into_state(self, defaults: &CalculatorDefaults) -> AppResult<CalculatorState> {
        let participant_count = if self.names.is_empty() {
            self.count.unwrap_or(defaults.initial_participants)
        } else {
            self.names.len()
        };
        if participant_count == 0 || participant_count > MAX_PEOPLE as usize {
            return Err(AppError::Validation(format!(
                "between 1 and {MAX_PEOPLE} participants are required (got {participant_count})"
            )));
        }

        let mut state = CalculatorState::new(CalculatorDefaults {
            initial_participants: participant_count,
            ..defaults.clone()
        });

        let renames: Vec<Action> = state
            .roster
            .participants()
            .iter()
            .zip(self.names)
            .map(|(p, name)| Action::RenameParticipant { id: p.id, name })
            .collect();
        state = state.reduce_all(renames);

        for who in &self.exclude {
            let id = crate::command::resolve_participant(&state.roster, who)?;
            state = state.reduce(Action::SetSelected {
                id,
                is_selected: false,
            });
        }

        if let Some(unit) = self.rounding_unit {
            state = state.reduce(Action::SetRoundingUnit(unit));
        }

        if let Some(extra) = self.extra_payers {
            let extra =
                validate_extra_payer_choice(extra).map_err(|e| AppError::InvalidInput(e.to_string()))?;
            if !state.is_extra_payer_choice_enabled(extra) {
                return Err(AppError::Validation(format!(
                    "{extra} extra payers requested but only {} participant(s) selected",
                    state.roster.selected_count()
                )));
            }
            state = state.reduce(Action::SetExtraPayers(extra));
        }

        Ok(state.reduce(Action::SetTotal(self.total)))
    }
}

/// Single-absorber split request.
#[derive(Debug, Clone, Default)]
pub struct SimpleRequest {
    /// Raw total text.
    pub total: String,
    /// Raw people count; clamped to at least 1.
    pub people: Option<String>,
    /// Rounding unit override.
    pub rounding_unit: Option<RoundingUnit>,
}

impl SimpleRequest {
    /// Builds the calculator state for this request.
    #[must_use]
    pub fn into_state(self, defaults: &CalculatorDefaults) -> SimpleCalculatorState {
        let mut state = SimpleCalculatorState::new(defaults.clone());
        if let Some(people) = self.people {
            state = state.reduce(SimpleAction::SetPeopleCount(people));
        }
        if let Some(unit) = self.rounding_unit {
            state = state.reduce(SimpleAction::SetRoundingUnit(unit));
        }
        state.reduce(SimpleAction::SetTotal(self.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_named_participants() {
        let state = SplitRequest {
            total: "10000".into(),
            names: vec!["Ana".into(), "Bo".into(), "Cy".into()],
            extra_payers: Some(2),
            ..SplitRequest::default()
        }
        .into_state(&CalculatorDefaults::default())
        .unwrap();

        let report = state.report();
        let names: Vec<_> = report.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bo", "Cy"]);
        let amounts: Vec<_> = report.lines.iter().map(|l| l.amount).collect();
        assert_eq!(amounts, vec![dec!(3350), dec!(3350), dec!(3300)]);
    }

    #[test]
    fn test_default_count() {
        let state = SplitRequest {
            total: "10000".into(),
            count: Some(4),
            ..SplitRequest::default()
        }
        .into_state(&CalculatorDefaults::default())
        .unwrap();
        assert_eq!(state.roster.len(), 4);
        assert_eq!(state.roster.participants()[3].name, "사람 4");
        assert_eq!(state.split_result().base_amount, dec!(2500));
    }

    #[test]
    fn test_exclude_by_name() {
        let state = SplitRequest {
            total: "9000".into(),
            names: vec!["Ana".into(), "Bo".into(), "Cy".into()],
            exclude: vec!["Bo".into()],
            ..SplitRequest::default()
        }
        .into_state(&CalculatorDefaults::default())
        .unwrap();
        assert_eq!(state.roster.selected_count(), 2);
        assert_eq!(state.split_result().base_amount, dec!(4500));
    }

    #[test]
    fn test_exclude_twice_stays_excluded() {
        let state = SplitRequest {
            total: "9000".into(),
            names: vec!["Ana".into(), "Bo".into(), "Cy".into()],
            exclude: vec!["Bo".into(), "Bo".into(), "2".into()],
            ..SplitRequest::default()
        }
        .into_state(&CalculatorDefaults::default())
        .unwrap();
        assert_eq!(state.roster.selected_count(), 2);
        assert!(state.roster.find_by_name("Bo").is_some_and(|p| !p.is_selected));
        assert_eq!(state.split_result().base_amount, dec!(4500));
    }

    #[test]
    fn test_count_above_max_people() {
        let err = SplitRequest {
            total: "9000".into(),
            count: Some(MAX_PEOPLE as usize + 1),
            ..SplitRequest::default()
        }
        .into_state(&CalculatorDefaults::default())
        .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_simple_request_huge_people_count() {
        let report = SimpleRequest {
            total: "10000".into(),
            people: Some("4000000000".into()),
            rounding_unit: None,
        }
        .into_state(&CalculatorDefaults::default())
        .report();
        assert_eq!(report.people_count, MAX_PEOPLE);
        assert_eq!(report.shares.len(), MAX_PEOPLE as usize);
    }

    #[test]
    fn test_exclude_unknown() {
        let err = SplitRequest {
            total: "9000".into(),
            exclude: vec!["Zed".into()],
            ..SplitRequest::default()
        }
        .into_state(&CalculatorDefaults::default())
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_extra_payers_above_selected() {
        let err = SplitRequest {
            total: "9000".into(),
            extra_payers: Some(3),
            ..SplitRequest::default()
        }
        .into_state(&CalculatorDefaults::default())
        .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_zero_count() {
        let err = SplitRequest {
            count: Some(0),
            ..SplitRequest::default()
        }
        .into_state(&CalculatorDefaults::default())
        .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_simple_request() {
        let state = SimpleRequest {
            total: "10000".into(),
            people: Some("3".into()),
            rounding_unit: Some(RoundingUnit::Thousand),
        }
        .into_state(&CalculatorDefaults::default());
        let result = state.split_result();
        assert_eq!(result.base_amount, dec!(3000));
        assert_eq!(result.absorber_total, dec!(4000));
    }
}
