//! Complete engine configuration and file I/O.
//!
//! Files are TOML or JSON, selected by extension. Every section is
//! optional; missing sections and fields fall back to their defaults.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use crate::placement::PlacementConfig;
use crate::scoring::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ordered workstation types the solver tries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskCandidates {
    /// Wall and mixed plans
    pub wall: Vec<String>,
    /// Face-to-face plan
    pub face: Vec<String>,
    /// Both plans when wide desks are prioritised
    pub wide_only: Vec<String>,
}

impl Default for DeskCandidates {
    fn default() -> Self {
        Self {
            wall: vec![
                "ws_1200x600".to_string(),
                "ws_1000x600".to_string(),
                "ws_1200x700".to_string(),
            ],
            face: vec![
                "ws_1000x600".to_string(),
                "ws_1200x600".to_string(),
                "ws_1200x700".to_string(),
            ],
            wide_only: vec!["ws_1200x600".to_string(), "ws_1200x700".to_string()],
        }
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Complete engine configuration
///
/// Aggregates all sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub placement: PlacementConfig,
    pub scoring: ScoringConfig,
    pub candidates: DeskCandidates,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(content: &str) -> SettingsResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let config = match format {
            ConfigFormat::Json => Self::from_json_str(&content)?,
            ConfigFormat::Toml => Self::from_toml_str(&content)?,
        };
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.placement.validate()?;
        self.scoring.validate()?;

        for (name, list) in [
            ("wall", &self.candidates.wall),
            ("face", &self.candidates.face),
            ("wide_only", &self.candidates.wide_only),
        ] {
            if list.is_empty() {
                return Err(SettingsError::invalid(
                    format!("candidates.{name}"),
                    "must list at least one workstation type",
                ));
            }
        }
        Ok(())
    }
}
