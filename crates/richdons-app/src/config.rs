//! Configuration management for richdons-budget
//!
//! Config stored at: ~/.config/richdons-budget/config.json

use richdons_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Pricing TOML file replacing the standard rates (optional)
    #[serde(default)]
    pub pricing_file: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Symbol printed in front of amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pricing_file: None,
            output_format: default_output_format(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("richdons-budget");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path, or default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content).map_err(|e| {
                ConfigError::ParseError(format!("{}: {}", path.display(), e))
            })?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "RichDons Budget Configuration")?;
        writeln!(f, "=============================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Pricing file:   {}",
            self.pricing_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(standard rates)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Currency:       {}", self.currency_symbol)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
