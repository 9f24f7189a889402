//! Configuration management for folio
//!
//! This module defines the configuration tree for the HTTP server, the
//! contact relay's mail provider and the terminal easter egg, plus the
//! loader that reads it from disk and applies environment overrides.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use zeroize::Zeroizing;

/// Environment variable holding the listen port
pub const PORT_ENV: &str = "PORT";

/// Environment variable pointing at an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";

/// Main configuration structure for folio
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Mail provider configuration for the contact relay
    pub mail: MailConfig,

    /// Terminal easter egg configuration
    pub terminal: TerminalConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Listen port
    pub port: u16,

    /// Directory served as static assets
    pub static_dir: PathBuf,

    /// Root document served for `GET /`
    pub index_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: PathBuf::from("public"),
            index_file: "index.html".to_string(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Full path of the root document
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join(&self.index_file)
    }
}

/// Mail provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// Base URL of the provider API
    pub api_base_url: String,

    /// Environment variable the API key is read from
    pub api_key_env: String,

    /// Verified sender address
    pub sender: String,

    /// Fixed recipient of every contact message
    pub recipient: String,

    /// Prefix prepended to the submitted subject
    pub subject_prefix: String,

    /// Provider request timeout in seconds
    pub request_timeout_secs: u64,

    /// API key, populated from the environment only
    #[serde(skip)]
    pub api_key: Option<ApiKey>,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.sendgrid.com".to_string(),
            api_key_env: "SENDGRID_API_KEY".to_string(),
            sender: "noreply@portfolio.dev".to_string(),
            recipient: "nr0498@srmist.edu.in".to_string(),
            subject_prefix: "Portfolio Contact: ".to_string(),
            request_timeout_secs: 15,
            api_key: None,
        }
    }
}

impl MailConfig {
    /// Provider request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Terminal easter egg configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Delay before the view closes after `exit`, in milliseconds
    pub exit_close_delay_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            exit_close_delay_ms: 1500,
        }
    }
}

impl TerminalConfig {
    /// Delay before the view closes after `exit`
    pub fn exit_close_delay(&self) -> Duration {
        Duration::from_millis(self.exit_close_delay_ms)
    }
}

/// Provider API key, wiped from memory on drop and never printed
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Zeroizing<String>);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Zeroizing::new(key.into()))
    }

    /// Raw key for building the authorization header
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
