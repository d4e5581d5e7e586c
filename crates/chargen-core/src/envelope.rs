//! Request and response envelopes for a single dialog turn.

use serde::{Deserialize, Serialize};

use crate::metadata::SessionMetadata;
use crate::subject::Subject;

/// An inbound dialog request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogRequest {
    /// The intent this request carries.
    pub subject: Subject,
    /// Identifier of the requesting user. Absence aborts dispatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Conversation state carried between turns.
    #[serde(default)]
    pub metadata: SessionMetadata,
}

/// The primary spoken channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceOutput {
    /// SSML text spoken immediately.
    pub ssml_text: String,
    /// Plain-text rendering, where the surface needs one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
}

/// The delayed spoken channel, used for follow-up prompts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayedVoiceOutput {
    /// SSML text spoken after a pause.
    pub ssml_text: String,
}

/// The visual card channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualOutput {
    /// Card title.
    pub title: String,
    /// Card body.
    pub text: String,
}

/// An outbound dialog response.
///
/// Invariant: when `conversation_ended` is false the delayed voice channel
/// is populated; when true, no delayed prompt is expected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    /// Primary spoken output.
    pub voice_output: VoiceOutput,
    /// Delayed follow-up prompt.
    pub delayed_voice_output: DelayedVoiceOutput,
    /// Visual card.
    pub visual_output: VisualOutput,
    /// Whether this turn ends the conversation.
    pub conversation_ended: bool,
    /// Echoed conversation state, possibly annotated by the handler.
    pub metadata: SessionMetadata,
}

impl DialogResponse {
    /// Creates an empty response that keeps the conversation open,
    /// echoing the given metadata.
    #[must_use]
    pub fn continuing(metadata: SessionMetadata) -> Self {
        Self {
            voice_output: VoiceOutput::default(),
            delayed_voice_output: DelayedVoiceOutput::default(),
            visual_output: VisualOutput::default(),
            conversation_ended: false,
            metadata,
        }
    }

    /// Creates an empty response that ends the conversation, echoing the
    /// given metadata.
    #[must_use]
    pub fn ending(metadata: SessionMetadata) -> Self {
        Self {
            conversation_ended: true,
            ..Self::continuing(metadata)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_with_missing_user_id_and_metadata() {
        let request: DialogRequest =
            serde_json::from_str(r#"{"subject": "HELP"}"#).unwrap();
        assert_eq!(request.subject, Subject::Help);
        assert!(request.user_id.is_none());
        assert!(request.metadata.conversation_history.is_empty());
    }

    #[test]
    fn test_request_tolerates_unknown_fields() {
        let request: DialogRequest = serde_json::from_str(
            r#"{"subject": "STOP", "userId": "u-1", "locale": "en-US"}"#,
        )
        .unwrap();
        assert_eq!(request.subject, Subject::Stop);
        assert_eq!(request.user_id.as_deref(), Some("u-1"));
    }

    #[test]
    fn test_response_serializes_camel_case_channels() {
        let response = DialogResponse::ending(SessionMetadata::default());
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("voiceOutput").is_some());
        assert!(json.get("delayedVoiceOutput").is_some());
        assert!(json.get("visualOutput").is_some());
        assert_eq!(json["conversationEnded"], true);
    }
}
