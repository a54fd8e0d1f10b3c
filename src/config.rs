//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rcsv/rcsv.toml`
//! 3. Environment variables: `RCSV_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub delimiter: Option<String>,
    pub output_delimiter: Option<String>,
    pub log_level: Option<String>,
}

/// Unified configuration for rcsv.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Input field delimiter (default: ',')
    pub delimiter: char,
    /// Output field delimiter (default: ',')
    pub output_delimiter: Option<char>,
    /// Log filter used when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: ',',
            output_delimiter: None,
            log_level: "warn".into(),
        }
    }
}

/// Get the XDG config directory for rcsv.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rcsv").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rcsv.toml"))
}

/// Parse a user-supplied delimiter.
///
/// Accepts one ASCII character, or `\t` / `tab` for a tab. The quote
/// character and line terminators are rejected: they cannot separate fields.
pub fn parse_delimiter(value: &str) -> Result<char, ApplicationError> {
    match value {
        "\\t" | "tab" => return Ok('\t'),
        _ => {}
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some('"' | '\n' | '\r'), None) => Err(ApplicationError::Config {
            message: format!(
                "invalid delimiter {:?}: quote and line terminators are reserved",
                value
            ),
        }),
        (Some(c), None) if c.is_ascii() => Ok(c),
        _ => Err(ApplicationError::Config {
            message: format!(
                "invalid delimiter {:?}: expected a single ASCII character",
                value
            ),
        }),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Input delimiter as a byte. Delimiters are validated ASCII on load.
    pub fn input_delimiter(&self) -> u8 {
        self.delimiter as u8
    }

    /// Output delimiter as a byte, falling back to ','.
    pub fn output_delimiter(&self) -> u8 {
        self.output_delimiter.unwrap_or(',') as u8
    }

    /// Overlay explicitly specified values onto self.
    fn merge_with(&self, overlay: &RawSettings) -> Result<Self, ApplicationError> {
        Ok(Self {
            delimiter: match &overlay.delimiter {
                Some(d) => parse_delimiter(d)?,
                None => self.delimiter,
            },
            output_delimiter: match &overlay.output_delimiter {
                Some(d) => Some(parse_delimiter(d)?),
                None => self.output_delimiter,
            },
            log_level: overlay
                .log_level
                .clone()
                .unwrap_or_else(|| self.log_level.clone()),
        })
    }

    /// Load settings from the global config location.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_path` - Optional TOML file; skipped if it does not exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. TOML file at `config_path`
    /// 3. Environment variables: `RCSV_*` prefix
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                debug!("loading config {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw)?;
            }
        }

        current = Self::apply_env_overrides(current)?;
        Ok(current)
    }

    /// Apply RCSV_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("RCSV")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        let raw = RawSettings {
            delimiter: config.get_string("delimiter").ok(),
            output_delimiter: config.get_string("output_delimiter").ok(),
            log_level: config.get_string("log_level").ok(),
        };
        settings.merge_with(&raw)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
