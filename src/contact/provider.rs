//! Mail providers
//!
//! [`MailProvider`] is the seam between the relay and the outside world.
//! [`SendGridProvider`] talks to the SendGrid v3 mail-send API; tests
//! substitute their own implementations.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::Serialize;

use super::{OutboundEmail, ProviderError};
use crate::config::{ApiKey, MailConfig};

/// Something that can deliver an [`OutboundEmail`]
#[async_trait]
pub trait MailProvider: Send + Sync {
    /// Deliver one message; no retries
    async fn send(&self, email: &OutboundEmail) -> Result<(), ProviderError>;

    /// Short provider name for logs
    fn name(&self) -> &'static str;
}

/// SendGrid v3 `mail/send` client
pub struct SendGridProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<ApiKey>,
}

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: &'a str,
}

#[derive(Serialize)]
struct MailSendRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    reply_to: Address<'a>,
    subject: &'a str,
    content: [Content<'a>; 1],
}

impl<'a> From<&'a OutboundEmail> for MailSendRequest<'a> {
    fn from(email: &'a OutboundEmail) -> Self {
        Self {
            personalizations: [Personalization {
                to: [Address { email: &email.to }],
            }],
            from: Address { email: &email.from },
            reply_to: Address {
                email: &email.reply_to,
            },
            subject: &email.subject,
            content: [Content {
                kind: "text/html",
                value: &email.html,
            }],
        }
    }
}

impl SendGridProvider {
    pub fn new(config: &MailConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });

        Self {
            client,
            endpoint: format!("{}/v3/mail/send", config.api_base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn auth_headers(&self) -> Result<HeaderMap, ProviderError> {
        let key = self.api_key.as_ref().ok_or(ProviderError::MissingApiKey)?;
        let mut value = HeaderValue::from_str(&format!("Bearer {}", key.expose()))
            .map_err(|e| ProviderError::Other(format!("invalid auth header: {e}")))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }
}

#[async_trait]
impl MailProvider for SendGridProvider {
    async fn send(&self, email: &OutboundEmail) -> Result<(), ProviderError> {
        let headers = self.auth_headers()?;
        let response = self
            .client
            .post(&self.endpoint)
            .headers(headers)
            .json(&MailSendRequest::from(email))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!("SendGrid accepted message (status {})", status);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ProviderError::Unauthorized {
                status: status.as_u16(),
                body,
            }),
            _ => Err(ProviderError::Rejected {
                status: status.as_u16(),
                body,
            }),
        }
    }

    fn name(&self) -> &'static str {
        "sendgrid"
    }
}
