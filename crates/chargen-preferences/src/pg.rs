//! `PostgreSQL` implementation of the `PreferenceStore` trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::store::{PreferenceStore, PreferenceStoreError, UserPreferences};

const SELECT_PREFERENCES: &str =
    "SELECT preferences FROM user_preferences WHERE user_id = $1";

const UPSERT_PREFERENCES: &str = "INSERT INTO user_preferences (user_id, preferences, updated_at) \
     VALUES ($1, $2, $3) \
     ON CONFLICT (user_id) DO UPDATE \
     SET preferences = EXCLUDED.preferences, updated_at = EXCLUDED.updated_at";

/// PostgreSQL-backed preference store.
///
/// Preferences are stored as a JSONB document per user. Reads and writes
/// are single statements; the read-modify-write sequence around a toggle
/// lives in the dialog layer and is not transactional.
#[derive(Debug, Clone)]
pub struct PgPreferenceStore {
    pool: PgPool,
}

impl PgPreferenceStore {
    /// Creates a new `PgPreferenceStore`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferenceStore for PgPreferenceStore {
    async fn get(&self, user_id: &str) -> Result<Option<UserPreferences>, PreferenceStoreError> {
        let row: Option<serde_json::Value> = sqlx::query_scalar(SELECT_PREFERENCES)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| PreferenceStoreError::Backend(e.to_string()))?;

        row.map(|value| {
            serde_json::from_value(value).map_err(|e| PreferenceStoreError::Decode(e.to_string()))
        })
        .transpose()
    }

    async fn put(
        &self,
        user_id: &str,
        preferences: &UserPreferences,
    ) -> Result<(), PreferenceStoreError> {
        let payload = serde_json::to_value(preferences)
            .map_err(|e| PreferenceStoreError::Decode(e.to_string()))?;

        sqlx::query(UPSERT_PREFERENCES)
            .bind(user_id)
            .bind(payload)
            .bind(chrono::Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| PreferenceStoreError::Backend(e.to_string()))?;

        tracing::debug!(user_id, "stored user preferences");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::store::UserPreferences;

    #[test]
    fn test_preferences_round_trip_through_stored_json_shape() {
        // Arrange
        let preferences = UserPreferences {
            allow_profanity: Some(true),
        };

        // Act
        let value = serde_json::to_value(&preferences).unwrap();
        let back: UserPreferences = serde_json::from_value(value.clone()).unwrap();

        // Assert
        assert_eq!(value["allowProfanity"], true);
        assert_eq!(back, preferences);
    }

    #[test]
    fn test_unset_preference_stores_an_empty_document() {
        let value = serde_json::to_value(UserPreferences::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}
