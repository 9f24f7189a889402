//! The contact relay service
//!
//! Validates a submission, builds the outbound email and hands it to the
//! provider exactly once. Nothing is queued or retried.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use super::{ContactSubmission, Envelope, MailProvider, OutboundEmail, RelayError};

/// Proof of a delivered submission
#[derive(Debug, Clone, PartialEq)]
pub struct RelayReceipt {
    /// Correlation id recorded in the logs
    pub id: Uuid,
    pub provider: &'static str,
    pub sent_at: DateTime<Utc>,
}

/// Forwards contact submissions to a [`MailProvider`]
#[derive(Clone)]
pub struct ContactRelay {
    provider: Arc<dyn MailProvider>,
    envelope: Envelope,
}

impl ContactRelay {
    pub fn new(provider: Arc<dyn MailProvider>, envelope: Envelope) -> Self {
        Self { provider, envelope }
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Relay one submission
    pub async fn relay(&self, submission: ContactSubmission) -> Result<RelayReceipt, RelayError> {
        let id = Uuid::new_v4();

        let form = submission.validate().inspect_err(|e| {
            info!(relay_id = %id, "Rejected contact submission: {}", e);
        })?;

        let email = OutboundEmail::compose(&self.envelope, &form);
        match self.provider.send(&email).await {
            Ok(()) => {
                info!(
                    relay_id = %id,
                    provider = self.provider.name(),
                    "Contact message relayed"
                );
                Ok(RelayReceipt {
                    id,
                    provider: self.provider.name(),
                    sent_at: Utc::now(),
                })
            }
            Err(e) => {
                error!(
                    relay_id = %id,
                    provider = self.provider.name(),
                    "Contact message delivery failed: {}",
                    e
                );
                Err(RelayError::Delivery(e))
            }
        }
    }
}

impl std::fmt::Debug for ContactRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactRelay")
            .field("provider", &self.provider.name())
            .field("envelope", &self.envelope)
            .finish()
    }
}
