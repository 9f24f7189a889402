//! Contact relay
//!
//! Everything between a submitted contact form and the mail provider:
//! presence validation ([`submission`]), message construction
//! ([`message`]), the provider seam ([`provider`]) and the relay service
//! itself ([`relay`]). [`compose`] builds the webmail link the deployed
//! form opens instead of calling the relay.

pub mod compose;
pub mod error;
pub mod message;
pub mod provider;
pub mod relay;
pub mod submission;

pub use error::{ProviderError, RelayError};
pub use message::{Envelope, OutboundEmail};
pub use provider::{MailProvider, SendGridProvider};
pub use relay::{ContactRelay, RelayReceipt};
pub use submission::{ContactForm, ContactSubmission};

use serde::{Deserialize, Serialize};

/// Message returned after a successful relay
pub const SENT_MESSAGE: &str = "Message sent successfully!";

/// JSON body of every relay response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
