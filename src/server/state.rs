use std::sync::Arc;

use crate::config::Config;
use crate::contact::{ContactRelay, Envelope, MailProvider, SendGridProvider};

/// Shared, immutable per-process state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub relay: ContactRelay,
}

impl AppState {
    /// State backed by the SendGrid provider described in `config`
    pub fn from_config(config: &Config) -> Arc<Self> {
        let provider = Arc::new(SendGridProvider::new(&config.mail));
        Self::with_provider(provider, Envelope::from(&config.mail))
    }

    /// State backed by an arbitrary provider
    pub fn with_provider(provider: Arc<dyn MailProvider>, envelope: Envelope) -> Arc<Self> {
        Arc::new(Self {
            relay: ContactRelay::new(provider, envelope),
        })
    }
}
