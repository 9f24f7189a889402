use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::ApiResponse;

/// Client-facing message for a rejected submission
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";

/// Client-facing message for a failed delivery
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Failure reported by a mail provider
///
/// The payload is diagnostic detail for logs; it never reaches the client.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider API key not configured")]
    MissingApiKey,

    #[error("Provider rejected credentials (status {status}): {body}")]
    Unauthorized { status: u16, body: String },

    #[error("Provider rejected message (status {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider error: {0}")]
    Other(String),
}

/// Failure of one relay request
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Delivery failed: {0}")]
    Delivery(#[from] ProviderError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingFields(_) => StatusCode::BAD_REQUEST,
            RelayError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show the submitter
    pub fn public_message(&self) -> &'static str {
        match self {
            RelayError::MissingFields(_) => MISSING_FIELDS_MESSAGE,
            RelayError::Delivery(_) => DELIVERY_FAILED_MESSAGE,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = ApiResponse::failure(self.public_message());
        (self.status(), Json(body)).into_response()
    }
}
