//! Test Fixtures

use axum::{body::Body, http::Response, Router};
use folio::config::ServerConfig;
use folio::contact::{Envelope, MailProvider};
use folio::server::{router, AppState};
use std::sync::Arc;
use tempfile::TempDir;

pub const INDEX_HTML: &str = "<!doctype html><title>portfolio</title><h1>Hello</h1>";

/// Temporary static directory holding `index.html` and `style.css`
pub fn static_dir_with_index() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(dir.path().join("style.css"), "body { color: #00d4ff; }").unwrap();
    dir
}

/// Router over `provider` serving assets from `static_dir`
pub fn build_app(provider: Arc<dyn MailProvider>, static_dir: &TempDir) -> Router {
    let server = ServerConfig {
        static_dir: static_dir.path().to_path_buf(),
        ..ServerConfig::default()
    };
    router(&server, AppState::with_provider(provider, Envelope::default()))
}

/// JSON body for a submission; `None` omits the field
pub fn submission_json(
    name: Option<&str>,
    email: Option<&str>,
    subject: Option<&str>,
    message: Option<&str>,
) -> String {
    let mut body = serde_json::Map::new();
    for (key, value) in [
        ("name", name),
        ("email", email),
        ("subject", subject),
        ("message", message),
    ] {
        if let Some(value) = value {
            body.insert(key.to_string(), serde_json::Value::from(value));
        }
    }
    serde_json::Value::Object(body).to_string()
}

/// Collect a response body as JSON
pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
