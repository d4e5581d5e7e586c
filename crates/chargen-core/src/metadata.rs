//! Session metadata carried on every request, response, and history entry.

use serde::{Deserialize, Serialize};

use crate::subject::Subject;

/// Tag on metadata indicating a pending yes/no question awaiting resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionTopic {
    /// The onboarding question about whether profanity is acceptable.
    AllowProfanity,
    /// Any unrecognized wire value. Answering a question with an unknown
    /// topic is a dialog error, not a deserialization failure.
    #[serde(other)]
    Unknown,
}

/// Metadata attached to requests, responses, and conversation-history
/// entries.
///
/// This is a single concrete type rather than an open-ended payload: the
/// generator slots (`heading`, `character`) are how a later `REPEAT` turn
/// recovers earlier output, and `question_topic` is how a `YES`/`NO` turn
/// finds the question it answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetadata {
    /// Past turns, most recent first.
    #[serde(default)]
    pub conversation_history: Vec<ConversationHistoryEntry>,
    /// Pending yes/no question, if one was just asked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_topic: Option<QuestionTopic>,
    /// Heading of the most recent generated character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// Description of the most recent generated character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
}

/// A single past turn in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationHistoryEntry {
    /// The subject the turn was dispatched with.
    pub subject: Subject,
    /// The metadata the turn carried.
    #[serde(default)]
    pub metadata: SessionMetadata,
}
