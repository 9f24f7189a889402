//! Unit tests for the webmail compose link

use folio::contact::compose::{compose_body, compose_url, DEFAULT_SUBJECT};
use folio::contact::ContactSubmission;
use url::Url;

fn param(link: &str, key: &str) -> Option<String> {
    Url::parse(link)
        .unwrap()
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[test]
fn test_body_layout() {
    let form = ContactSubmission::new("Ada", "ada@example.com", "Hi", "Line 1\nLine 2");
    assert_eq!(
        compose_body(&form),
        "Name: Ada\nEmail: ada@example.com\n\nMessage:\nLine 1\nLine 2"
    );
}

#[test]
fn test_special_characters_survive_encoding() {
    let form = ContactSubmission::new(
        "Zoë & Co",
        "zoe+test@example.com",
        "50% off? #deal",
        "a=b&c=d",
    );
    let link = compose_url(&form, "owner@example.com");

    assert_eq!(param(&link, "su").as_deref(), Some("50% off? #deal"));
    assert!(param(&link, "body").unwrap().contains("zoe+test@example.com"));
    assert!(param(&link, "body").unwrap().ends_with("a=b&c=d"));
    assert!(!link.contains('#'));
}

#[test]
fn test_missing_fields_render_empty() {
    let form = ContactSubmission::default();
    let link = compose_url(&form, "owner@example.com");

    assert_eq!(param(&link, "su").as_deref(), Some(DEFAULT_SUBJECT));
    assert_eq!(
        param(&link, "body").as_deref(),
        Some("Name: \nEmail: \n\nMessage:\n")
    );
}
