//! Shared application state.

use std::sync::Arc;

use chargen_dialog::DialogManager;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The dialog manager serving every turn.
    pub dialog: Arc<DialogManager>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(dialog: Arc<DialogManager>) -> Self {
        Self { dialog }
    }
}
