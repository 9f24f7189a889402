//! Test Utilities and Mocks
//!
//! Shared helpers for the integration and contract tests: a recording mail
//! provider and fixtures for building a router against a temporary static
//! directory.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{build_app, read_json, static_dir_with_index, submission_json, INDEX_HTML};
pub use mock_provider::{MockMailProvider, ProviderBehavior};
