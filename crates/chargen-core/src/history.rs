//! Conversation-history lookup.

use crate::metadata::ConversationHistoryEntry;

/// Returns the most recent substantive turn: the first entry (history is
/// ordered most recent first) whose subject is not a meta subject
/// (`REPEAT`, `YES`, `NO`).
///
/// Returns `None` when no qualifying entry exists; callers convert that
/// into the dialog error appropriate to their operation.
#[must_use]
pub fn last_substantive_entry(
    history: &[ConversationHistoryEntry],
) -> Option<&ConversationHistoryEntry> {
    history.iter().find(|entry| !entry.subject.is_meta())
}

/// Mutable variant of [`last_substantive_entry`], for handlers that
/// annotate the recovered turn's metadata.
#[must_use]
pub fn last_substantive_entry_mut(
    history: &mut [ConversationHistoryEntry],
) -> Option<&mut ConversationHistoryEntry> {
    history.iter_mut().find(|entry| !entry.subject.is_meta())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::SessionMetadata;
    use crate::subject::Subject;

    fn entry(subject: Subject) -> ConversationHistoryEntry {
        ConversationHistoryEntry {
            subject,
            metadata: SessionMetadata::default(),
        }
    }

    #[test]
    fn test_skips_meta_subjects() {
        let history = vec![
            entry(Subject::Yes),
            entry(Subject::Repeat),
            entry(Subject::GenerateCharacter),
            entry(Subject::Help),
        ];

        let found = last_substantive_entry(&history).unwrap();
        assert_eq!(found.subject, Subject::GenerateCharacter);
    }

    #[test]
    fn test_returns_first_entry_when_not_meta() {
        let history = vec![entry(Subject::Help), entry(Subject::GenerateCharacter)];

        let found = last_substantive_entry(&history).unwrap();
        assert_eq!(found.subject, Subject::Help);
    }

    #[test]
    fn test_returns_none_when_all_entries_are_meta() {
        let history = vec![entry(Subject::Repeat), entry(Subject::No)];
        assert!(last_substantive_entry(&history).is_none());
    }

    #[test]
    fn test_returns_none_for_empty_history() {
        assert!(last_substantive_entry(&[]).is_none());
    }

    #[test]
    fn test_mut_variant_allows_annotation() {
        let mut history = vec![entry(Subject::Yes), entry(Subject::GenerateCharacter)];

        let found = last_substantive_entry_mut(&mut history).unwrap();
        found.metadata.heading = Some("It's a".to_owned());

        assert_eq!(history[1].metadata.heading.as_deref(), Some("It's a"));
    }
}
