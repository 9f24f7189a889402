use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::AppState;
use crate::contact::{ApiResponse, ContactSubmission, RelayError, SENT_MESSAGE};

/// `POST /send-email`
///
/// A body that is not a JSON object of strings is treated like an empty
/// submission, so it gets the same 400 as missing fields.
pub async fn send_email_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<ApiResponse>, RelayError> {
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            warn!("Unreadable contact payload: {}", rejection.body_text());
            ContactSubmission::default()
        }
    };

    state.relay.relay(submission).await?;
    Ok(Json(ApiResponse::success(SENT_MESSAGE)))
}
