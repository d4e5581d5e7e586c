//! The dialog endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use chargen_core::envelope::DialogRequest;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/dialog
///
/// Runs one dialog turn. Unrecognized subjects are a deliberate no-op and
/// return 204 with no body.
async fn handle_dialog(
    State(state): State<AppState>,
    Json(request): Json<DialogRequest>,
) -> Result<Response, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("dialog_turn", %request_id, subject = ?request.subject);

    let outcome = state.dialog.handle_request(request).instrument(span).await?;
    match outcome {
        Some(response) => Ok(Json(response).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Returns the dialog router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(handle_dialog))
}
