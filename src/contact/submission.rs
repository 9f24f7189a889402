//! Contact form submissions
//!
//! Fields are validated for presence only. An absent field and an empty
//! string are both treated as missing; anything else, whitespace included,
//! is passed through untouched.

use serde::{Deserialize, Serialize};

use super::RelayError;

/// Raw submission as received, every field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Submission with every field present
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: Some(subject.into()),
            message: Some(message.into()),
        }
    }

    /// Names of the fields that are absent or empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| !present(value))
        .map(|(field, _)| field)
        .collect()
    }

    /// Check presence of every field
    pub fn validate(self) -> Result<ContactForm, RelayError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(RelayError::MissingFields(missing));
        }

        match (self.name, self.email, self.subject, self.message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(ContactForm {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(RelayError::MissingFields(vec![
                "name", "email", "subject", "message",
            ])),
        }
    }
}
