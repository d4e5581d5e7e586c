//! Dialog error types.

use thiserror::Error;

/// Top-level error type for a dialog turn.
#[derive(Debug, Error)]
pub enum DialogError {
    /// The request carried no user identifier.
    #[error("request carried no user id")]
    UnknownUser,

    /// A yes/no answer arrived with no conversation history to resolve it
    /// against. Also raised by a repeat with nothing to repeat.
    #[error("no ongoing conversation to resolve the turn against")]
    NoOngoingConversation,

    /// A yes/no answer arrived but the last substantive turn carried no
    /// pending question.
    #[error("no pending question on the last substantive turn")]
    NoPendingQuestion,

    /// The pending question's topic is not one this service knows how to
    /// resolve.
    #[error("unrecognized question topic on the last substantive turn")]
    UnrecognizedQuestionTopic,

    /// Persisting a preference change failed.
    #[error("preference update failed: {0}")]
    PreferenceUpdateFailed(String),

    /// Conversation-history metadata could not be located for annotation.
    #[error("conversation history metadata unavailable")]
    MetadataUnavailable,

    /// Any other infrastructure failure.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DialogError {
    /// The apology spoken to the user when this error surfaces.
    #[must_use]
    pub fn spoken_message(&self) -> &'static str {
        match self {
            Self::UnknownUser => {
                "Sorry, but I can't for the life of me seem to figure out \
                 who you are or how you got here."
            }
            Self::NoOngoingConversation => {
                "Sorry, I heard what sounded like an answer to a question, \
                 but I don't think we had an ongoing conversation."
            }
            Self::NoPendingQuestion => {
                "Sorry, I heard what sounded like an answer to a question, \
                 but I don't recall asking a yes or no question."
            }
            Self::UnrecognizedQuestionTopic => {
                "Sorry, I know I asked you a question, but I seem to have \
                 forgotten what I was doing."
            }
            Self::PreferenceUpdateFailed(_) => {
                "Sorry, something went wrong and I couldn't change the \
                 level of my profanity filter."
            }
            Self::MetadataUnavailable => {
                "Sorry, something went wrong and I lost track of our \
                 conversation."
            }
            Self::Infrastructure(_) => "Sorry, something went wrong on my end.",
        }
    }
}
