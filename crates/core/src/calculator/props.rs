//! Property-based tests for calculator state transitions.
//!
//! - The roster never becomes empty
//! - Reports always satisfy the exact-partition invariant
//! - Participant IDs stay unique
//! - Reducing the same action sequence twice gives the same state

use proptest::prelude::*;

use dutchpay_shared::config::MAX_PEOPLE;
use dutchpay_shared::types::ParticipantId;

use super::simple::{DECREMENT_FLOOR, SimpleAction, SimpleCalculatorState};
use super::state::{Action, CalculatorState};
use crate::split::RoundingUnit;

fn rounding_unit() -> impl Strategy<Value = RoundingUnit> {
    prop::sample::select(RoundingUnit::ALL.to_vec())
}

fn action() -> impl Strategy<Value = Action> {
    let id = (1u32..8).prop_map(ParticipantId::new);
    prop_oneof![
        (0u32..1_000_000).prop_map(|n| Action::SetTotal(n.to_string())),
        Just(Action::SetTotal(String::new())),
        Just(Action::AddParticipant),
        id.clone().prop_map(Action::RemoveParticipant),
        id.clone().prop_map(Action::ToggleParticipant),
        (id.clone(), any::<bool>())
            .prop_map(|(id, is_selected)| Action::SetSelected { id, is_selected }),
        (id, "[a-z]{0,6}").prop_map(|(id, name)| Action::RenameParticipant { id, name }),
        rounding_unit().prop_map(Action::SetRoundingUnit),
        (0usize..6).prop_map(Action::SetExtraPayers),
    ]
}

fn simple_action() -> impl Strategy<Value = SimpleAction> {
    prop_oneof![
        (0u32..1_000_000).prop_map(|n| SimpleAction::SetTotal(n.to_string())),
        Just(SimpleAction::Increment),
        Just(SimpleAction::Decrement),
        "-?[0-9]{0,12}".prop_map(SimpleAction::SetPeopleCount),
        rounding_unit().prop_map(SimpleAction::SetRoundingUnit),
        Just(SimpleAction::Reset),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// The roster keeps at least one participant and unique IDs.
    #[test]
    fn prop_roster_never_empty(actions in prop::collection::vec(action(), 0..40)) {
        let state = CalculatorState::default().reduce_all(actions);
        prop_assert!(state.roster.len() >= 1);

        let mut ids: Vec<_> = state.roster.participants().iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), state.roster.len());
    }

    /// Every report partitions its total exactly and its lines add up.
    #[test]
    fn prop_report_partitions_total(actions in prop::collection::vec(action(), 0..40)) {
        let report = CalculatorState::default().reduce_all(actions).report();
        if let Some(total) = report.total.filter(|_| report.has_result) {
            prop_assert_eq!(report.reconstructed_total, total);
            let sum: rust_decimal::Decimal = report.lines.iter().map(|l| l.amount).sum();
            prop_assert_eq!(sum, report.collected_total);
            prop_assert!(report.surplus >= rust_decimal::Decimal::ZERO);
            prop_assert_eq!(report.lines.len(), report.selected_count);
        } else {
            prop_assert!(report.lines.is_empty());
        }
    }

    /// The same actions always lead to the same state.
    #[test]
    fn prop_reduce_is_deterministic(actions in prop::collection::vec(action(), 0..40)) {
        let first = CalculatorState::default().reduce_all(actions.clone());
        let second = CalculatorState::default().reduce_all(actions);
        prop_assert_eq!(first.report(), second.report());
        prop_assert_eq!(first, second);
    }

    /// The single-absorber people count stays within bounds, and shares add up.
    #[test]
    fn prop_simple_form(actions in prop::collection::vec(simple_action(), 0..40)) {
        let state = actions
            .into_iter()
            .fold(SimpleCalculatorState::default(), |s, a| s.reduce(a));
        prop_assert!((1..=MAX_PEOPLE).contains(&state.people_count));

        let report = state.report();
        if let Some(total) = report.total {
            let sum: rust_decimal::Decimal = report.shares.iter().map(|s| s.amount).sum();
            prop_assert_eq!(sum, total);
            prop_assert!(report.shares.iter().filter(|s| s.is_absorber).count() <= 1);
        }
    }

    /// Decrement never takes the count below the floor.
    #[test]
    fn prop_decrement_floor(start in 2u32..20, presses in 0usize..40) {
        let state = SimpleCalculatorState::default()
            .reduce(SimpleAction::SetPeopleCount(start.to_string()));
        let state = (0..presses).fold(state, |s, _| s.reduce(SimpleAction::Decrement));
        prop_assert!(state.people_count >= DECREMENT_FLOOR);
    }
}
