//! Multi-payer calculator state.

use rust_decimal::Decimal;

use dutchpay_shared::config::{MAX_EXTRA_PAYERS, MAX_PEOPLE};
use dutchpay_shared::types::ParticipantId;

use super::defaults::CalculatorDefaults;
use super::report::{ExtraPayerChoice, RosterEntry, ShareLine, SplitReport};
use crate::roster::Roster;
use crate::split::{RoundingUnit, SplitEngine, SplitResult, parse_amount};

/// A user event on the multi-payer form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the raw total text.
    SetTotal(String),
    /// Append a participant with the next default name (ignored at
    /// `MAX_PEOPLE`).
    AddParticipant,
    /// Remove a participant (ignored for the last one).
    RemoveParticipant(ParticipantId),
    /// Flip a participant's inclusion.
    ToggleParticipant(ParticipantId),
    /// Include or exclude a participant explicitly.
    SetSelected {
        /// Participant to update.
        id: ParticipantId,
        /// Whether the participant shares the bill.
        is_selected: bool,
    },
    /// Rename a participant.
    RenameParticipant {
        /// Participant to rename.
        id: ParticipantId,
        /// New name.
        name: String,
    },
    /// Choose the rounding unit.
    SetRoundingUnit(RoundingUnit),
    /// Choose the number of extra payers (ignored when disabled).
    SetExtraPayers(usize),
    /// Return every input to its default.
    Reset,
}

/// Multi-payer form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    /// Raw total text as typed.
    pub total_input: String,
    /// Participants.
    pub roster: Roster,
    /// Rounding unit.
    pub rounding_unit: RoundingUnit,
    /// Requested extra payers; clamped to the selected count when computing.
    pub extra_payer_count: usize,
    /// Values restored on reset.
    pub defaults: CalculatorDefaults,
}

impl CalculatorState {
    /// Creates a fresh state from defaults.
    #[must_use]
    pub fn new(defaults: CalculatorDefaults) -> Self {
        Self {
            total_input: String::new(),
            roster: Roster::with_defaults(defaults.initial_participants, &defaults.name_prefix),
            rounding_unit: defaults.rounding_unit,
            extra_payer_count: defaults.extra_payers,
            defaults,
        }
    }

    /// Applies an action and returns the next state.
    #[must_use]
    pub fn reduce(&self, action: Action) -> Self {
        match action {
            Action::SetTotal(raw) => Self {
                total_input: raw,
                ..self.clone()
            },
            Action::AddParticipant if self.roster.len() >= MAX_PEOPLE as usize => self.clone(),
            Action::AddParticipant => Self {
                roster: self.roster.with_added(&self.defaults.name_prefix),
                ..self.clone()
            },
            Action::RemoveParticipant(id) => Self {
                roster: self.roster.without(id),
                ..self.clone()
            },
            Action::ToggleParticipant(id) => Self {
                roster: self.roster.with_toggled(id),
                ..self.clone()
            },
            Action::SetSelected { id, is_selected } => Self {
                roster: self.roster.with_selected(id, is_selected),
                ..self.clone()
            },
            Action::RenameParticipant { id, name } => Self {
                roster: self.roster.with_renamed(id, &name),
                ..self.clone()
            },
            Action::SetRoundingUnit(rounding_unit) => Self {
                rounding_unit,
                ..self.clone()
            },
            Action::SetExtraPayers(count) if self.is_extra_payer_choice_enabled(count) => Self {
                extra_payer_count: count,
                ..self.clone()
            },
            Action::SetExtraPayers(_) => self.clone(),
            Action::Reset => Self::new(self.defaults.clone()),
        }
    }

    /// Applies actions in order.
    #[must_use]
    pub fn reduce_all(&self, actions: impl IntoIterator<Item = Action>) -> Self {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.reduce(action))
    }

    /// Whether an extra-payer button can be pressed.
    #[must_use]
    pub fn is_extra_payer_choice_enabled(&self, count: usize) -> bool {
        (1..=MAX_EXTRA_PAYERS).contains(&count) && count <= self.roster.selected_count()
    }

    /// Parsed total, if the raw text holds a number.
    #[must_use]
    pub fn total(&self) -> Option<Decimal> {
        parse_amount(&self.total_input)
    }

    /// Whether there is anything to show.
    #[must_use]
    pub fn has_result(&self) -> bool {
        self.total().is_some() && self.roster.selected_count() > 0
    }

    /// Recomputes the split from the current inputs.
    #[must_use]
    pub fn split_result(&self) -> SplitResult {
        SplitEngine::compute_optional(
            self.total(),
            self.roster.selected_count(),
            self.rounding_unit,
            self.extra_payer_count,
        )
    }

    /// Builds the full report for rendering.
    #[must_use]
    pub fn report(&self) -> SplitReport {
        let total = self.total();
        let selected_count = self.roster.selected_count();
        let has_result = total.is_some() && selected_count > 0;
        let result = self.split_result();

        let participants = self
            .roster
            .participants()
            .iter()
            .map(|p| RosterEntry {
                id: p.id,
                name: p.name.clone(),
                is_selected: p.is_selected,
                pays_extra: self
                    .roster
                    .selected_position(p.id)
                    .is_some_and(|pos| result.pays_extra(pos)),
            })
            .collect();

        let lines: Vec<ShareLine> = if has_result {
            self.roster
                .selected()
                .enumerate()
                .map(|(pos, p)| {
                    let amount = result.amount_for(pos);
                    ShareLine {
                        id: p.id,
                        name: p.name.clone(),
                        amount,
                        extra: amount - result.base_amount,
                        pays_extra: result.pays_extra(pos),
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let extra_payer_choices = (1..=MAX_EXTRA_PAYERS)
            .map(|count| {
                let enabled = count <= selected_count;
                ExtraPayerChoice {
                    count,
                    enabled,
                    active: enabled && count == self.extra_payer_count,
                }
            })
            .collect();

        let collected_total = if has_result {
            result.collected_total(selected_count)
        } else {
            Decimal::ZERO
        };
        let reconstructed_total = if has_result {
            result.reconstructed_total(selected_count)
        } else {
            Decimal::ZERO
        };
        let surplus = total.map_or(Decimal::ZERO, |t| {
            if has_result { collected_total - t } else { Decimal::ZERO }
        });

        SplitReport {
            total,
            rounding_unit: self.rounding_unit,
            participant_count: self.roster.len(),
            selected_count,
            requested_extra_payers: self.extra_payer_count,
            result,
            participants,
            lines,
            extra_payer_choices,
            reconstructed_total,
            collected_total,
            surplus,
            has_result,
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(CalculatorDefaults::default())
    }
}
