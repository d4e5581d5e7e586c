//! Preference store abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-user preferences.
///
/// `allow_profanity` is tri-state: `None` means the user has never been
/// asked, which drives the lazy-initialization flow on the first generate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Whether the user opted in to profanity. `None` = never asked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_profanity: Option<bool>,
}

/// Errors raised by a preference store.
#[derive(Debug, Error)]
pub enum PreferenceStoreError {
    /// The backing store failed.
    #[error("preference store backend error: {0}")]
    Backend(String),

    /// A stored record could not be decoded.
    #[error("preference record decode error: {0}")]
    Decode(String),
}

/// Store trait for loading and saving user preferences.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Load the preferences for a user. `Ok(None)` means no record exists.
    async fn get(&self, user_id: &str) -> Result<Option<UserPreferences>, PreferenceStoreError>;

    /// Save the preferences for a user, replacing any existing record.
    async fn put(
        &self,
        user_id: &str,
        preferences: &UserPreferences,
    ) -> Result<(), PreferenceStoreError>;
}
