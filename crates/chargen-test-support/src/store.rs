//! Test stores — mock `PreferenceStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chargen_preferences::{PreferenceStore, PreferenceStoreError, UserPreferences};

/// A preference store backed by an in-memory map. Reads and writes both
/// succeed; tests inspect stored state through [`Self::stored`].
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    records: Mutex<HashMap<String, UserPreferences>>,
}

impl InMemoryPreferenceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with one user's preferences.
    #[must_use]
    pub fn with_preferences(user_id: &str, preferences: UserPreferences) -> Self {
        let store = Self::new();
        store
            .records
            .lock()
            .unwrap()
            .insert(user_id.to_owned(), preferences);
        store
    }

    /// Returns the stored preferences for a user, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn stored(&self, user_id: &str) -> Option<UserPreferences> {
        self.records.lock().unwrap().get(user_id).cloned()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(&self, user_id: &str) -> Result<Option<UserPreferences>, PreferenceStoreError> {
        Ok(self.records.lock().unwrap().get(user_id).cloned())
    }

    async fn put(
        &self,
        user_id: &str,
        preferences: &UserPreferences,
    ) -> Result<(), PreferenceStoreError> {
        self.records
            .lock()
            .unwrap()
            .insert(user_id.to_owned(), preferences.clone());
        Ok(())
    }
}

/// A preference store that always fails. Useful for testing the degraded
/// read path and the fatal write path.
#[derive(Debug, Default)]
pub struct FailingPreferenceStore;

#[async_trait]
impl PreferenceStore for FailingPreferenceStore {
    async fn get(&self, _user_id: &str) -> Result<Option<UserPreferences>, PreferenceStoreError> {
        Err(PreferenceStoreError::Backend("connection refused".into()))
    }

    async fn put(
        &self,
        _user_id: &str,
        _preferences: &UserPreferences,
    ) -> Result<(), PreferenceStoreError> {
        Err(PreferenceStoreError::Backend("connection refused".into()))
    }
}
