//! Webmail compose links
//!
//! The deployed contact form skips the relay entirely and opens a
//! pre-filled Gmail compose window instead. This builds that link.

use url::form_urlencoded::Serializer;

use super::ContactSubmission;

const COMPOSE_BASE: &str = "https://mail.google.com/mail/";

/// Subject used when the form's subject is empty
pub const DEFAULT_SUBJECT: &str = "Portfolio Contact";

/// Body text of the compose window
pub fn compose_body(form: &ContactSubmission) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        form.name.as_deref().unwrap_or_default(),
        form.email.as_deref().unwrap_or_default(),
        form.message.as_deref().unwrap_or_default(),
    )
}

/// Gmail compose URL addressed to `to`, prefilled from `form`
///
/// Values are `application/x-www-form-urlencoded`: spaces become `+` and
/// `'()!*` are percent-encoded. Gmail decodes both forms identically.
pub fn compose_url(form: &ContactSubmission, to: &str) -> String {
    let subject = form
        .subject
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SUBJECT);

    let query = Serializer::new(String::new())
        .append_pair("view", "cm")
        .append_pair("fs", "1")
        .append_pair("to", to)
        .append_pair("su", subject)
        .append_pair("body", &compose_body(form))
        .finish();
    format!("{}?{}", COMPOSE_BASE, query)
}
