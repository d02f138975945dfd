//! Configuration management for docpub.
//!
//! Parses `docpub.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `google_docs.api_url`
//! - `google_docs.access_token`
//! - `google_docs.service_account_key`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override access token (replaces any configured service account key).
    pub access_token: Option<String>,
    /// Override document insert index.
    pub insert_index: Option<usize>,
    /// Override whether the document URL is saved next to the source.
    pub save_url: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docpub.toml";

/// Default Google Docs API root.
const DEFAULT_API_URL: &str = "https://docs.googleapis.com";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Google Docs API configuration.
    pub google_docs: GoogleDocsConfig,
    /// Publish behaviour.
    pub publish: PublishConfig,
    /// Document styling.
    pub style: StyleConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Google Docs API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GoogleDocsConfig {
    /// API root URL.
    pub api_url: String,
    /// Pre-issued OAuth access token.
    pub access_token: Option<String>,
    /// Service account JSON key file, relative to the config file.
    pub service_account_key: Option<PathBuf>,
}

impl Default for GoogleDocsConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            access_token: None,
            service_account_key: None,
        }
    }
}

/// Where API credentials come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource<'a> {
    /// Pre-issued access token.
    AccessToken(&'a str),
    /// Service account key file.
    ServiceAccountKey(&'a Path),
}

impl GoogleDocsConfig {
    /// Validate the section and return the configured credential source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the URL is invalid, or unless
    /// exactly one of `access_token` and `service_account_key` is set.
    pub fn validate(&self) -> Result<CredentialSource<'_>, ConfigError> {
        require_non_empty(&self.api_url, "google_docs.api_url")?;
        require_http_url(&self.api_url, "google_docs.api_url")?;

        match (&self.access_token, &self.service_account_key) {
            (Some(token), None) => {
                require_non_empty(token, "google_docs.access_token")?;
                Ok(CredentialSource::AccessToken(token))
            }
            (None, Some(path)) => Ok(CredentialSource::ServiceAccountKey(path)),
            (Some(_), Some(_)) => Err(ConfigError::Validation(
                "google_docs.access_token and google_docs.service_account_key are mutually exclusive"
                    .to_owned(),
            )),
            (None, None) => Err(ConfigError::Validation(
                "google_docs.access_token or google_docs.service_account_key required".to_owned(),
            )),
        }
    }
}

/// Publish behaviour configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Document index the text is inserted at.
    pub insert_index: usize,
    /// Write the document URL to `gdoc_url.txt` beside the source file.
    pub save_url: bool,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            insert_index: 1,
            save_url: false,
        }
    }
}

/// Document styling configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Body font size in points.
    pub base_font_size: f32,
    /// Heading accent colour as `#rrggbb`.
    pub accent_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            base_font_size: 11.0,
            accent_color: "#1a73e8".to_owned(),
        }
    }
}

impl StyleConfig {
    /// Accent colour as RGB bytes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the colour is not `#rrggbb`.
    pub fn accent_rgb(&self) -> Result<[u8; 3], ConfigError> {
        parse_hex_color(&self.accent_color).ok_or_else(|| {
            ConfigError::Validation(format!(
                "style.accent_color must be #rrggbb, got {:?}",
                self.accent_color
            ))
        })
    }
}

/// Parse a `#rrggbb` colour.
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<[u8; 3]> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`google_docs.access_token`").
        field: String,
        /// Error message (e.g., "${`GOOGLE_DOCS_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docpub.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(token) = &settings.access_token {
            self.google_docs.access_token = Some(token.clone());
            self.google_docs.service_account_key = None;
        }
        if let Some(insert_index) = settings.insert_index {
            self.publish.insert_index = insert_index;
        }
        if let Some(save_url) = settings.save_url {
            self.publish.save_url = save_url;
        }
    }

    /// Get the validated credential source.
    ///
    /// Use this instead of reading the `google_docs` fields directly when the
    /// command talks to the API.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if credentials are missing or invalid.
    pub fn require_credentials(&self) -> Result<CredentialSource<'_>, ConfigError> {
        self.google_docs.validate()
    }

    /// Search for a config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Credentials are checked separately by [`Config::require_credentials`],
    /// since offline commands do not need them.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_publish()?;
        self.validate_style()?;
        Ok(())
    }

    fn validate_publish(&self) -> Result<(), ConfigError> {
        // Index 0 precedes the body segment and cannot hold text
        if self.publish.insert_index == 0 {
            return Err(ConfigError::Validation(
                "publish.insert_index must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_style(&self) -> Result<(), ConfigError> {
        const MAX_FONT_SIZE: f32 = 400.0;

        let size = self.style.base_font_size;
        if !(size > 0.0 && size <= MAX_FONT_SIZE) {
            return Err(ConfigError::Validation(format!(
                "style.base_font_size must be in (0, {MAX_FONT_SIZE}]"
            )));
        }
        self.style.accent_rgb()?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let google_docs = &mut self.google_docs;
        google_docs.api_url = expand::expand_env(&google_docs.api_url, "google_docs.api_url")?;

        if let Some(ref token) = google_docs.access_token {
            google_docs.access_token =
                Some(expand::expand_env(token, "google_docs.access_token")?);
        }

        if let Some(ref key) = google_docs.service_account_key
            && let Some(key) = key.to_str()
        {
            google_docs.service_account_key = Some(PathBuf::from(expand::expand_env(
                key,
                "google_docs.service_account_key",
            )?));
        }

        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        if let Some(ref key) = self.google_docs.service_account_key {
            self.google_docs.service_account_key = Some(config_dir.join(key));
        }
    }
}
