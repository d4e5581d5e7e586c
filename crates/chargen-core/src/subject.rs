//! Request subject vocabulary.

use serde::{Deserialize, Serialize};

/// The intent/action label of an inbound request.
///
/// Wire values outside the recognized set deserialize to [`Subject::Unknown`]
/// rather than failing, so new assistant intents never break the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Subject {
    /// Generate a new random character.
    GenerateCharacter,
    /// Usage instructions.
    Help,
    /// Turn the profanity preference on.
    EnableProfanity,
    /// Turn the profanity preference off.
    DisableProfanity,
    /// First turn of a session; treated as a generate request.
    StartOfConversation,
    /// Final turn of a session.
    EndOfConversation,
    /// User cancelled.
    Cancel,
    /// User asked to stop.
    Stop,
    /// Repeat the last generated character.
    Repeat,
    /// Affirmative answer to a pending question.
    Yes,
    /// Negative answer to a pending question.
    No,
    /// Any unrecognized wire value. Dispatch treats this as a silent no-op.
    #[serde(other)]
    Unknown,
}

impl Subject {
    /// Returns true for subjects that refer back to an earlier turn rather
    /// than carrying their own content. Meta subjects are skipped when
    /// searching history for the last substantive turn.
    #[must_use]
    pub fn is_meta(self) -> bool {
        matches!(self, Self::Repeat | Self::Yes | Self::No)
    }
}
