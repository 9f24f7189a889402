//! Configuration File Loading
//!
//! Handles loading and saving configuration files from various locations,
//! then layers environment overrides (`PORT`, the provider API key) on top.

use super::{ApiKey, Config, CONFIG_PATH_ENV, PORT_ENV};
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files (without extension)
    search_paths: Vec<PathBuf>,
    /// Supported configuration file formats
    supported_formats: Vec<ConfigFormat>,
    /// Current configuration file path (if loaded)
    current_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    fn name(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Whether to fall back to the default config if none exists
    pub create_default: bool,
    /// Whether to validate configuration after loading
    pub validate: bool,
    /// Whether to apply process environment overrides
    pub apply_env: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            create_default: true,
            validate: true,
            apply_env: true,
        }
    }
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            search_paths: Self::get_search_paths(),
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
            current_path: None,
        }
    }

    /// Load configuration with default options
    pub fn load() -> Result<Config> {
        Self::new().load_with_options(LoadOptions::default())
    }

    /// Load configuration with custom options
    pub fn load_with_options(&mut self, options: LoadOptions) -> Result<Config> {
        let mut config = if let Some(explicit) = env::var_os(CONFIG_PATH_ENV) {
            let path = PathBuf::from(explicit);
            let config = self.load_from_path(&path)?;
            self.current_path = Some(path);
            config
        } else if let Some((path, config)) = self.find_and_load_config()? {
            info!("Configuration loaded from {}", path.display());
            self.current_path = Some(path);
            config
        } else if options.create_default {
            debug!("No configuration file found, using defaults");
            Config::default()
        } else {
            return Err(Error::ConfigNotFound);
        };

        if options.apply_env {
            apply_env_overrides(&mut config, |key| env::var(key).ok())?;
        }

        if options.validate {
            validate_config(&config)?;
        }

        Ok(config)
    }

    /// Load a configuration file, picking the format from its extension
    pub fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(Error::ConfigLoadFailed {
                path: path.to_path_buf(),
                reason: "Configuration file does not exist".to_string(),
            });
        }
        self.load_config_file(path, ConfigFormat::from_path(path))
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let format = ConfigFormat::from_path(path);
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
        }
        .map_err(|reason| Error::ConfigParseFailed {
            format: format.name().to_string(),
            reason,
        })?;

        fs::write(path, content)?;
        Ok(())
    }

    /// Find and load configuration from search paths
    fn find_and_load_config(&self) -> Result<Option<(PathBuf, Config)>> {
        for path in &self.search_paths {
            for format in &self.supported_formats {
                let config_path = path.with_extension(format.extension());

                if config_path.exists() {
                    match self.load_config_file(&config_path, *format) {
                        Ok(config) => return Ok(Some((config_path, config))),
                        Err(e) => {
                            warn!(
                                "Failed to load config from {}: {}",
                                config_path.display(),
                                e
                            );
                            continue;
                        }
                    }
                }
            }
        }

        Ok(None)
    }

    /// Load a specific configuration file
    fn load_config_file(&self, path: &Path, format: ConfigFormat) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        match format {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                format: format.name().to_string(),
                reason: e.to_string(),
            }),
            ConfigFormat::Json => {
                serde_json::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                    format: format.name().to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Get default search paths for configuration files
    fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(cwd) = env::current_dir() {
            paths.push(cwd.join("folio"));
        }

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("folio").join("config"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".folio"));
        }

        paths
    }

    /// Get the current configuration file path
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// List all search paths
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Clear all search paths and add a single path
    pub fn set_search_path(&mut self, path: PathBuf) {
        self.search_paths = vec![path];
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply environment overrides using `lookup` to read variables
///
/// `PORT` replaces the listen port; the variable named by
/// `mail.api_key_env` supplies the provider API key.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup(PORT_ENV) {
        config.server.port = port.trim().parse().map_err(|_| Error::InvalidEnvOverride {
            key: PORT_ENV.to_string(),
            value: port.clone(),
        })?;
    }

    match lookup(&config.mail.api_key_env) {
        Some(key) if !key.trim().is_empty() => {
            config.mail.api_key = Some(ApiKey::new(key.trim()));
        }
        _ => {
            warn!(
                "{} not set, contact relay deliveries will fail",
                config.mail.api_key_env
            );
        }
    }

    Ok(())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::ConfigValidationFailed {
            field: "server.port".to_string(),
            reason: "Port must be greater than 0".to_string(),
        });
    }

    if config.server.index_file.trim().is_empty() {
        return Err(Error::ConfigValidationFailed {
            field: "server.index_file".to_string(),
            reason: "Index file cannot be empty".to_string(),
        });
    }

    if url::Url::parse(&config.mail.api_base_url).is_err() {
        return Err(Error::ConfigValidationFailed {
            field: "mail.api_base_url".to_string(),
            reason: format!("'{}' is not a valid URL", config.mail.api_base_url),
        });
    }

    for (field, value) in [
        ("mail.sender", &config.mail.sender),
        ("mail.recipient", &config.mail.recipient),
    ] {
        if !value.contains('@') {
            return Err(Error::ConfigValidationFailed {
                field: field.to_string(),
                reason: format!("'{}' is not an email address", value),
            });
        }
    }

    if config.mail.request_timeout_secs == 0 {
        return Err(Error::ConfigValidationFailed {
            field: "mail.request_timeout_secs".to_string(),
            reason: "Timeout must be greater than 0".to_string(),
        });
    }

    if config.terminal.exit_close_delay_ms > 60_000 {
        return Err(Error::ConfigValidationFailed {
            field: "terminal.exit_close_delay_ms".to_string(),
            reason: "Close delay cannot exceed 60 seconds".to_string(),
        });
    }

    Ok(())
}
