//! Chargen Preferences — per-user preference persistence.
//!
//! Defines the [`PreferenceStore`] abstraction the dialog layer talks to,
//! plus the PostgreSQL implementation used in production. Tests inject
//! in-memory implementations from `chargen-test-support`.

mod pg;
mod store;

pub use pg::PgPreferenceStore;
pub use store::{PreferenceStore, PreferenceStoreError, UserPreferences};
