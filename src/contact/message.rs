//! Outbound email construction

use serde::Serialize;

use super::ContactForm;
use crate::config::MailConfig;

/// Fixed addressing shared by every relayed message
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub sender: String,
    pub recipient: String,
    pub subject_prefix: String,
}

impl From<&MailConfig> for Envelope {
    fn from(config: &MailConfig) -> Self {
        Self {
            sender: config.sender.clone(),
            recipient: config.recipient.clone(),
            subject_prefix: config.subject_prefix.clone(),
        }
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::from(&MailConfig::default())
    }
}

/// Provider-neutral email ready to hand to a [`super::MailProvider`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

impl OutboundEmail {
    /// Compose the notification for one contact form
    pub fn compose(envelope: &Envelope, form: &ContactForm) -> Self {
        Self {
            from: envelope.sender.clone(),
            to: envelope.recipient.clone(),
            reply_to: form.email.clone(),
            subject: format!("{}{}", envelope.subject_prefix, form.subject),
            html: render_html(form),
        }
    }
}

/// Escape text for interpolation into HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_html(form: &ContactForm) -> String {
    let name = escape_html(&form.name);
    let email = escape_html(&form.email);
    let subject = escape_html(&form.subject);
    let message = escape_html(&form.message).replace('\n', "<br>");

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
    <h2 style="color: #00d4ff;">New Contact Form Message</h2>
    <div style="background: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0;">
        <p><strong>From:</strong> {name}</p>
        <p><strong>Email:</strong> {email}</p>
        <p><strong>Subject:</strong> {subject}</p>
    </div>
    <div style="background: #ffffff; padding: 20px; border-left: 4px solid #00d4ff;">
        <h3>Message:</h3>
        <p style="line-height: 1.6;">{message}</p>
    </div>
    <hr style="margin: 30px 0;">
    <p style="color: #666; font-size: 12px;">
        This message was sent from your portfolio contact form.
    </p>
</div>"#
    )
}
