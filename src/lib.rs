//! folio - portfolio backend with a terminal easter egg
//!
//! This library provides the two behavioral cores of the portfolio site:
//! the contact relay that forwards form submissions to a mail provider,
//! and the interactive terminal that answers a handful of canned commands.
//!
//! ## Module Organization
//!
//! - [`terminal`] - Command table, transcript, interpreter, view state, key sequences
//! - [`scheduler`] - Deferred actions with cancellation tokens
//! - [`contact`] - Submission validation, email composition, mail providers, relay
//! - [`server`] - axum router for `POST /send-email` and static assets
//! - [`config`] - Configuration loading and environment overrides
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use folio::{load_config, server};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(None)?;
//! server::serve(&config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ```
//! use folio::terminal::Terminal;
//! use std::time::Instant;
//!
//! let mut terminal = Terminal::default();
//! terminal.open();
//! terminal.submit("help", Instant::now());
//! assert_eq!(terminal.transcript().lines()[0], "$ help");
//! ```
//!
//! ## Architecture
//!
//! The terminal is a single-owner value: every method takes `&mut self`
//! and time is passed in, so it runs the same under a REPL, a test or a
//! UI loop. The server runs one tokio task per request; the provider call
//! is the only await point and the shared state is immutable.

#![allow(unexpected_cfgs)]

#[macro_use]
extern crate tracing;

pub mod config;
pub mod contact;
pub mod error;
pub mod scheduler;
pub mod server;
pub mod terminal;

pub use config::{Config, loader::ConfigLoader};
pub use error::{Error, Result};
pub use terminal::Terminal;

use std::path::Path;

/// The current version of folio from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Load configuration for startup
///
/// With `path`, that file must exist and parse. Without it, the default
/// search locations are tried and defaults are used if none match. In both
/// cases environment overrides are applied and the result is validated.
///
/// # Errors
///
/// Returns an error if the explicit file is missing or malformed, an
/// environment override is invalid, or validation fails.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    info!("Initializing {} v{}", NAME, VERSION);

    let Some(path) = path else {
        return ConfigLoader::load();
    };

    let mut config = ConfigLoader::new().load_from_path(path)?;
    info!("Configuration loaded from {}", path.display());

    config::loader::apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    config::loader::validate_config(&config)?;
    Ok(config)
}

/// Human-readable explanation of a startup failure
pub fn handle_startup_error(error: &Error) -> String {
    match error {
        Error::ConfigLoadFailed { path, reason } => {
            format!(
                "Configuration Error: Failed to load config from '{}': {}\n\nTry:\n• Check the path passed with --config or FOLIO_CONFIG\n• Ensure file permissions are correct",
                path.display(),
                reason
            )
        }
        Error::ConfigParseFailed { format, reason } => {
            format!(
                "Configuration Error: Failed to parse {} config: {}\n\nTry:\n• Check configuration file syntax",
                format, reason
            )
        }
        Error::ConfigValidationFailed { field, reason } => {
            format!(
                "Configuration Error: Validation failed for '{}': {}",
                field, reason
            )
        }
        Error::InvalidEnvOverride { key, value } => {
            format!(
                "Environment Error: {} has invalid value '{}'\n\nTry:\n• Unset it to use the configured default",
                key, value
            )
        }
        Error::BindFailed { address, reason } => {
            format!(
                "Server Error: Could not listen on {}: {}\n\nTry:\n• Pick another port with --port or PORT\n• Check that no other process holds the port",
                address, reason
            )
        }
        _ => {
            format!(
                "Unexpected Error: {}\n\nPlease report this issue with RUST_LOG=debug output",
                error
            )
        }
    }
}
