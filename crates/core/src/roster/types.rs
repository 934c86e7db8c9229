//! Participant and roster types.
//!
//! Every transition returns a new `Roster`; the receiver is left untouched.

use serde::{Deserialize, Serialize};

use dutchpay_shared::types::ParticipantId;

/// A participant in the split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Stable identifier.
    pub id: ParticipantId,
    /// Display name.
    pub name: String,
    /// Whether the participant is included in the split.
    pub is_selected: bool,
}

impl Participant {
    /// Creates a selected participant with the default sequential name.
    #[must_use]
    pub fn with_default_name(id: ParticipantId, name_prefix: &str) -> Self {
        Self {
            id,
            name: default_name(name_prefix, id),
            is_selected: true,
        }
    }
}

/// Default name for a participant (`"<prefix> <id>"`).
#[must_use]
pub fn default_name(name_prefix: &str, id: ParticipantId) -> String {
    if name_prefix.is_empty() {
        id.to_string()
    } else {
        format!("{name_prefix} {id}")
    }
}

/// Ordered list of participants plus the next ID to hand out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    participants: Vec<Participant>,
    next_id: ParticipantId,
}

impl Roster {
    /// Creates a roster of `count` selected participants with IDs `1..=count`.
    ///
    /// `count` is raised to 1 so the roster is never empty.
    #[must_use]
    pub fn with_defaults(count: usize, name_prefix: &str) -> Self {
        let count = u32::try_from(count.max(1)).unwrap_or(u32::MAX);
        let participants = (1..=count)
            .map(|raw| Participant::with_default_name(ParticipantId::new(raw), name_prefix))
            .collect();

        Self {
            participants,
            next_id: ParticipantId::new(count).next(),
        }
    }

    /// All participants in display order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// The ID the next added participant receives.
    #[must_use]
    pub const fn next_id(&self) -> ParticipantId {
        self.next_id
    }

    /// Number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Always false; a roster keeps at least one participant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Looks up a participant.
    #[must_use]
    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Looks up a participant by exact name; the first match wins.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// Selected participants in display order.
    pub fn selected(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.is_selected)
    }

    /// Number of selected participants.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    /// Position of a participant among the selected ones.
    #[must_use]
    pub fn selected_position(&self, id: ParticipantId) -> Option<usize> {
        self.selected().position(|p| p.id == id)
    }

    /// Appends a selected participant named `"<prefix> <next_id>"`.
    #[must_use]
    pub fn with_added(&self, name_prefix: &str) -> Self {
        let mut next = self.clone();
        next.participants
            .push(Participant::with_default_name(self.next_id, name_prefix));
        next.next_id = self.next_id.next();
        next
    }

    /// Removes a participant.
    ///
    /// No-op when only one participant remains or the ID is unknown.
    #[must_use]
    pub fn without(&self, id: ParticipantId) -> Self {
        if self.participants.len() <= 1 {
            return self.clone();
        }
        let mut next = self.clone();
        next.participants.retain(|p| p.id != id);
        next
    }

    /// Flips a participant's inclusion. No-op for unknown IDs.
    #[must_use]
    pub fn with_toggled(&self, id: ParticipantId) -> Self {
        self.map_participant(id, |p| p.is_selected = !p.is_selected)
    }

    /// Sets a participant's inclusion. No-op for unknown IDs.
    #[must_use]
    pub fn with_selected(&self, id: ParticipantId, is_selected: bool) -> Self {
        self.map_participant(id, |p| p.is_selected = is_selected)
    }

    /// Renames a participant. Any text is accepted, including empty.
    #[must_use]
    pub fn with_renamed(&self, id: ParticipantId, name: &str) -> Self {
        self.map_participant(id, |p| p.name = name.to_string())
    }

    fn map_participant(&self, id: ParticipantId, f: impl Fn(&mut Participant)) -> Self {
        let mut next = self.clone();
        if let Some(p) = next.participants.iter_mut().find(|p| p.id == id) {
            f(p);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> ParticipantId {
        ParticipantId::new(raw)
    }

    #[test]
    fn test_default_roster() {
        let roster = Roster::with_defaults(2, "사람");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.participants()[0].name, "사람 1");
        assert_eq!(roster.participants()[1].name, "사람 2");
        assert!(roster.participants().iter().all(|p| p.is_selected));
        assert_eq!(roster.next_id(), id(3));
    }

    #[test]
    fn test_default_roster_never_empty() {
        let roster = Roster::with_defaults(0, "P");
        assert_eq!(roster.len(), 1);
        assert!(!roster.is_empty());
    }

    #[test]
    fn test_add_uses_sequential_name() {
        let roster = Roster::with_defaults(2, "사람").with_added("사람");
        assert_eq!(roster.len(), 3);
        let added = &roster.participants()[2];
        assert_eq!(added.id, id(3));
        assert_eq!(added.name, "사람 3");
        assert!(added.is_selected);
        assert_eq!(roster.next_id(), id(4));
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let roster = Roster::with_defaults(3, "P").without(id(3)).with_added("P");
        let ids: Vec<_> = roster.participants().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![id(1), id(2), id(4)]);
    }

    #[test]
    fn test_remove_last_participant_is_noop() {
        let roster = Roster::with_defaults(1, "P");
        let after = roster.without(id(1));
        assert_eq!(after, roster);
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let roster = Roster::with_defaults(2, "P");
        assert_eq!(roster.without(id(9)), roster);
    }

    #[test]
    fn test_transitions_leave_original_untouched() {
        let roster = Roster::with_defaults(2, "P");
        let toggled = roster.with_toggled(id(1));
        assert!(roster.participants()[0].is_selected);
        assert!(!toggled.participants()[0].is_selected);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let roster = Roster::with_defaults(2, "P");
        assert_eq!(roster.with_toggled(id(2)).with_toggled(id(2)), roster);
    }

    #[test]
    fn test_rename() {
        let roster = Roster::with_defaults(2, "P").with_renamed(id(2), "Mina");
        assert_eq!(roster.get(id(2)).unwrap().name, "Mina");
        assert_eq!(roster.find_by_name("Mina").unwrap().id, id(2));
        assert!(roster.find_by_name("P 2").is_none());
    }

    #[test]
    fn test_selected_positions_skip_excluded() {
        let roster = Roster::with_defaults(3, "P").with_selected(id(1), false);
        assert_eq!(roster.selected_count(), 2);
        assert_eq!(roster.selected_position(id(1)), None);
        assert_eq!(roster.selected_position(id(2)), Some(0));
        assert_eq!(roster.selected_position(id(3)), Some(1));
    }

    #[test]
    fn test_default_name_without_prefix() {
        assert_eq!(default_name("", id(5)), "5");
    }
}
