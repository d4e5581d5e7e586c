//! Request dispatch and per-subject response composition.

use std::sync::{Arc, Mutex, MutexGuard};

use chargen_core::envelope::{DialogRequest, DialogResponse};
use chargen_core::error::DialogError;
use chargen_core::history::{last_substantive_entry, last_substantive_entry_mut};
use chargen_core::metadata::QuestionTopic;
use chargen_core::rng::DeterministicRng;
use chargen_core::subject::Subject;
use chargen_generator::CharacterGenerator;
use chargen_preferences::{PreferenceStore, PreferenceStoreError, UserPreferences};

use crate::filter;
use crate::lines;

/// Entry point for dispatching dialog requests.
///
/// Holds the injected collaborators for one deployment: the preference
/// store, the character generator, the RNG, and the deployment-level
/// profanity switch. One instance serves all users.
pub struct DialogManager {
    store: Arc<dyn PreferenceStore>,
    generator: Arc<dyn CharacterGenerator>,
    rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    profanity_mode: bool,
}

impl DialogManager {
    /// Creates a manager over the given collaborators. `profanity_mode`
    /// is the deployment-level switch; without it no user ever hears
    /// profanity regardless of their stored preference.
    #[must_use]
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        generator: Arc<dyn CharacterGenerator>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        profanity_mode: bool,
    ) -> Self {
        Self {
            store,
            generator,
            rng,
            profanity_mode,
        }
    }

    /// Dispatches a request to the handler for its subject.
    ///
    /// Returns `Ok(None)` for subjects outside the recognized set; the
    /// caller produces no response for those.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::UnknownUser`] when the request carries no
    /// user id, plus whatever the selected handler raises.
    pub async fn handle_request(
        &self,
        request: DialogRequest,
    ) -> Result<Option<DialogResponse>, DialogError> {
        let Some(user_id) = request.user_id.clone() else {
            tracing::error!("unknown user, could not retrieve user preferences");
            return Err(DialogError::UnknownUser);
        };
        self.dispatch(&user_id, request).await
    }

    async fn dispatch(
        &self,
        user_id: &str,
        request: DialogRequest,
    ) -> Result<Option<DialogResponse>, DialogError> {
        match request.subject {
            Subject::GenerateCharacter | Subject::StartOfConversation => {
                let preferences = self.resolve_preferences(user_id).await;
                self.generate_character(user_id, &request, preferences)
                    .await
                    .map(Some)
            }
            Subject::Help => self.help(&request).map(Some),
            Subject::EnableProfanity => {
                self.toggle_profanity(user_id, &request, true).await.map(Some)
            }
            Subject::DisableProfanity => {
                self.toggle_profanity(user_id, &request, false).await.map(Some)
            }
            Subject::EndOfConversation => Ok(Some(Self::goodbye(&request))),
            Subject::Cancel | Subject::Stop => Ok(Some(Self::stop(&request))),
            Subject::Repeat => {
                let preferences = self.resolve_preferences(user_id).await;
                self.repeat(&request, preferences.as_ref()).map(Some)
            }
            Subject::Yes => self.yes_or_no(user_id, request, true).await,
            Subject::No => self.yes_or_no(user_id, request, false).await,
            Subject::Unknown => {
                tracing::debug!(user_id, "ignoring unrecognized subject");
                Ok(None)
            }
        }
    }

    /// Generates a new character, lazily initializing the profanity
    /// preference on first contact.
    async fn generate_character(
        &self,
        user_id: &str,
        request: &DialogRequest,
        preferences: Option<UserPreferences>,
    ) -> Result<DialogResponse, DialogError> {
        let never_asked = preferences
            .as_ref()
            .is_none_or(|p| p.allow_profanity.is_none());
        if never_asked {
            if self.profanity_mode {
                // Ask first; generation resumes once the user answers.
                return self.initialize_preferences(user_id, request);
            }
            self.set_profanity_allowed(user_id, false)
                .await
                .map_err(|e| {
                    tracing::error!(user_id, error = %e, "could not record default preference");
                    DialogError::PreferenceUpdateFailed(e.to_string())
                })?;
        }

        let (heading, character, delayed) = {
            let mut rng = self.lock_rng()?;
            let heading = self.generator.generate_heading(&mut *rng);
            let character = self.generator.generate_character(&mut *rng);
            let reaction = self.generator.generate_response(&mut *rng);
            let question = lines::pick_follow_up_question(&mut *rng);
            (heading, character, format!("{reaction} {question}"))
        };

        let mut response = DialogResponse::continuing(request.metadata.clone());
        response.voice_output.ssml_text = format!("{heading} {character}");
        response.visual_output.title = heading.clone();
        response.visual_output.text = character.clone();
        response.delayed_voice_output.ssml_text = delayed;

        // Stored unfiltered: a later repeat re-filters for whatever the
        // preference is at that time.
        response.metadata.heading = Some(heading.clone());
        response.metadata.character = Some(character.clone());
        if let Some(entry) =
            last_substantive_entry_mut(&mut response.metadata.conversation_history)
        {
            entry.metadata.heading = Some(heading);
            entry.metadata.character = Some(character);
        } else {
            tracing::debug!(user_id, "no substantive history entry to annotate");
        }

        self.filter_response(&mut response, preferences.as_ref());
        Ok(response)
    }

    fn help(&self, request: &DialogRequest) -> Result<DialogResponse, DialogError> {
        let mut ssml = String::from(
            "It's easy, just ask: 'Who is my character?'. You can also say: 'repeat', or 'another'",
        );
        if self.profanity_mode {
            ssml.push_str(", or you can ask to enable or disable profanity.");
        }

        let link = if self.profanity_mode {
            "www.whothefuckismydndcharacter.com"
        } else {
            "https://goo.gl/qYSFCi"
        };
        let visual_text = format!(
            "{ssml}\n\nFull usage can be found here: \
             http://www.3po-labs.com/CharacterGenerator.html \
             \n\nOur skill is based on {link} by Ryan J. Grant, based on \
             WTFEngine by Justin Windle",
        );

        let question = {
            let mut rng = self.lock_rng()?;
            lines::pick_follow_up_question(&mut *rng)
        };

        let mut response = DialogResponse::continuing(request.metadata.clone());
        response.voice_output.ssml_text = ssml;
        response.visual_output.title = "Character Generator Help".to_owned();
        response.visual_output.text = visual_text;
        response.delayed_voice_output.ssml_text = question.to_owned();
        Ok(response)
    }

    fn goodbye(request: &DialogRequest) -> DialogResponse {
        let mut response = DialogResponse::ending(request.metadata.clone());
        response.voice_output.ssml_text = "See ya!".to_owned();
        response.voice_output.plain_text = Some("See ya!".to_owned());
        response
    }

    fn stop(request: &DialogRequest) -> DialogResponse {
        let mut response = DialogResponse::ending(request.metadata.clone());
        response.voice_output.ssml_text = "You bet your bottom.".to_owned();
        response.voice_output.plain_text = Some("You bet your bottom.".to_owned());
        response
    }

    /// Resolves a pending yes/no question and resumes the turn that asked
    /// it by re-dispatching with the recovered subject.
    async fn yes_or_no(
        &self,
        user_id: &str,
        mut request: DialogRequest,
        answer: bool,
    ) -> Result<Option<DialogResponse>, DialogError> {
        if request.metadata.conversation_history.is_empty() {
            return Err(DialogError::NoOngoingConversation);
        }
        let entry = last_substantive_entry_mut(&mut request.metadata.conversation_history)
            .ok_or(DialogError::NoOngoingConversation)?;
        let Some(topic) = entry.metadata.question_topic else {
            return Err(DialogError::NoPendingQuestion);
        };
        let resumed_subject = entry.subject;
        // Consume the pending question.
        entry.metadata.question_topic = None;

        match topic {
            QuestionTopic::AllowProfanity => {
                self.set_profanity_allowed(user_id, answer)
                    .await
                    .map_err(|e| {
                        tracing::error!(user_id, error = %e, "could not record profanity answer");
                        DialogError::PreferenceUpdateFailed(e.to_string())
                    })?;
            }
            QuestionTopic::Unknown => return Err(DialogError::UnrecognizedQuestionTopic),
        }

        request.metadata.question_topic = None;
        request.subject = resumed_subject;
        Box::pin(self.dispatch(user_id, request)).await
    }

    /// Re-emits the stored heading/character verbatim behind a repeat
    /// preamble. Nothing is regenerated except the delayed prompt.
    fn repeat(
        &self,
        request: &DialogRequest,
        preferences: Option<&UserPreferences>,
    ) -> Result<DialogResponse, DialogError> {
        let entry = last_substantive_entry(&request.metadata.conversation_history)
            .ok_or(DialogError::NoOngoingConversation)?;
        let (Some(heading), Some(character)) = (
            entry.metadata.heading.clone(),
            entry.metadata.character.clone(),
        ) else {
            return Err(DialogError::NoOngoingConversation);
        };

        let (preamble, delayed) = {
            let mut rng = self.lock_rng()?;
            let preamble = lines::pick_repeat_preamble(&mut *rng);
            let reaction = self.generator.generate_response(&mut *rng);
            let question = lines::pick_follow_up_question(&mut *rng);
            (preamble, format!("{reaction} {question}"))
        };

        let mut response = DialogResponse::continuing(request.metadata.clone());
        response.voice_output.ssml_text = format!("{preamble} {heading} {character}");
        response.visual_output.title = heading;
        response.visual_output.text = character;
        response.delayed_voice_output.ssml_text = delayed;

        self.filter_response(&mut response, preferences);
        Ok(response)
    }

    /// First-contact flow: asks the profanity question and marks both the
    /// outgoing metadata and the asking turn's history entry with the
    /// pending topic.
    fn initialize_preferences(
        &self,
        user_id: &str,
        request: &DialogRequest,
    ) -> Result<DialogResponse, DialogError> {
        let mut response = DialogResponse::continuing(request.metadata.clone());
        let entry = last_substantive_entry_mut(&mut response.metadata.conversation_history)
            .ok_or(DialogError::MetadataUnavailable)?;
        entry.metadata.question_topic = Some(QuestionTopic::AllowProfanity);
        response.metadata.question_topic = Some(QuestionTopic::AllowProfanity);

        tracing::info!(user_id, "initializing preferences for first-time user");
        response.voice_output.ssml_text =
            "Hi! It looks like it's your first time here. Before we start, I should \
             tell you that I sometimes swear when I get excited. Are you comfortable \
             hearing profanity?"
                .to_owned();
        response.delayed_voice_output.ssml_text =
            "It's okay if you don't want to hear bad words, and you can always change \
             your mind later. Just say 'yes' or 'no'."
                .to_owned();
        response.visual_output.title = "Hi. How do you feel about profanity?".to_owned();
        response.visual_output.text =
            "Hi! It looks like this is the first time I've seen you here. Are you okay \
             with me using profanity?\n\nSay 'yes' if that's cool with you, or 'no' if \
             you want me to watch my mouth."
                .to_owned();
        Ok(response)
    }

    async fn toggle_profanity(
        &self,
        user_id: &str,
        request: &DialogRequest,
        enable: bool,
    ) -> Result<DialogResponse, DialogError> {
        self.set_profanity_allowed(user_id, enable)
            .await
            .map_err(|e| {
                tracing::error!(user_id, error = %e, "couldn't update allowable profanity state");
                DialogError::PreferenceUpdateFailed(e.to_string())
            })?;

        let confirmation = if enable {
            "You bet your ass."
        } else {
            "You bet your bottom."
        };
        let question = {
            let mut rng = self.lock_rng()?;
            lines::pick_follow_up_question(&mut *rng)
        };

        let mut response = DialogResponse::continuing(request.metadata.clone());
        response.voice_output.ssml_text = confirmation.to_owned();
        response.visual_output.title = "Updated!".to_owned();
        response.visual_output.text = confirmation.to_owned();
        response.delayed_voice_output.ssml_text = question.to_owned();
        Ok(response)
    }

    /// Loads preferences, degrading to `None` on any store failure. Read
    /// failures are never fatal; the turn continues anonymously.
    async fn resolve_preferences(&self, user_id: &str) -> Option<UserPreferences> {
        match self.store.get(user_id).await {
            Ok(preferences) => preferences,
            Err(error) => {
                tracing::error!(
                    user_id,
                    error = %error,
                    "could not retrieve preferences, continuing anonymously"
                );
                None
            }
        }
    }

    /// Read-modify-write of the profanity flag. Not atomic; concurrent
    /// toggles for one user are last-write-wins.
    async fn set_profanity_allowed(
        &self,
        user_id: &str,
        allowed: bool,
    ) -> Result<(), PreferenceStoreError> {
        let mut preferences = self.store.get(user_id).await?.unwrap_or_default();
        preferences.allow_profanity = Some(allowed);
        self.store.put(user_id, &preferences).await
    }

    fn filter_response(&self, response: &mut DialogResponse, preferences: Option<&UserPreferences>) {
        let allow = self.profanity_mode
            && preferences
                .and_then(|p| p.allow_profanity)
                .unwrap_or(false);
        filter::apply(response, allow);
    }

    fn lock_rng(&self) -> Result<MutexGuard<'_, dyn DeterministicRng + Send + 'static>, DialogError> {
        // Lock only around synchronous picks, never across an await.
        self.rng
            .lock()
            .map_err(|e| DialogError::Infrastructure(format!("RNG mutex poisoned: {e}")))
    }
}
