//! Derived report types.
//!
//! Reports are what a presentation layer renders. They carry every figure
//! the form shows so renderers never redo arithmetic.

use rust_decimal::Decimal;
use serde::Serialize;

use dutchpay_shared::types::ParticipantId;

use crate::split::{RoundingUnit, SingleAbsorberResult, SplitResult};

/// A roster row with its "extra payer" badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    /// Participant ID.
    pub id: ParticipantId,
    /// Display name.
    pub name: String,
    /// Whether the participant is included.
    pub is_selected: bool,
    /// Whether the participant carries an extra increment.
    pub pays_extra: bool,
}

/// One line of the per-person breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLine {
    /// Participant ID.
    pub id: ParticipantId,
    /// Display name.
    pub name: String,
    /// Amount owed (`base + extra`).
    pub amount: Decimal,
    /// Extra increment included in `amount`.
    pub extra: Decimal,
    /// Whether the line is highlighted as an extra payer.
    pub pays_extra: bool,
}

/// State of one extra-payer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtraPayerChoice {
    /// Number of extra payers the button selects.
    pub count: usize,
    /// False when `count` exceeds the selected participants.
    pub enabled: bool,
    /// Whether this choice is the current one.
    pub active: bool,
}

/// Everything the multi-payer form displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    /// Parsed total, if any.
    pub total: Option<Decimal>,
    /// Rounding unit.
    pub rounding_unit: RoundingUnit,
    /// Participants on the roster.
    pub participant_count: usize,
    /// Participants included in the split.
    pub selected_count: usize,
    /// Extra payers as requested (before clamping).
    pub requested_extra_payers: usize,
    /// Computed split.
    pub result: SplitResult,
    /// Roster rows with badges.
    pub participants: Vec<RosterEntry>,
    /// Per-person breakdown; empty without a result.
    pub lines: Vec<ShareLine>,
    /// Extra-payer buttons.
    pub extra_payer_choices: Vec<ExtraPayerChoice>,
    /// `base * selected + remainder`.
    pub reconstructed_total: Decimal,
    /// Sum of all lines.
    pub collected_total: Decimal,
    /// `collected_total - total`; positive when ceiling division overshoots.
    pub surplus: Decimal,
    /// False when the total is missing or nobody is selected.
    pub has_result: bool,
}

/// One line of the single-absorber breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimpleShareLine {
    /// 1-based position.
    pub position: usize,
    /// Amount owed.
    pub amount: Decimal,
    /// Whether this person absorbs the remainder.
    pub is_absorber: bool,
}

/// Everything the single-absorber form displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleReport {
    /// Parsed total, if any.
    pub total: Option<Decimal>,
    /// Number of people.
    pub people_count: u32,
    /// Rounding unit.
    pub rounding_unit: RoundingUnit,
    /// Computed split.
    pub result: SingleAbsorberResult,
    /// Per-person breakdown; empty without a result.
    pub shares: Vec<SimpleShareLine>,
    /// False when the total is missing.
    pub has_result: bool,
}
