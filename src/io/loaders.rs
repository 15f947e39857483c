use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::domain::TimeOfDay;
use crate::services::range;

fn default_step() -> String {
    // Half-hour grids are the common picker default
    "00:30".to_string()
}

/// Range configuration as supplied by a picker component.
///
/// Fields are kept as raw strings: validation is the generator's job, and
/// form code needs the original text back for its error messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    pub from: String,
    pub to: String,
    #[serde(default = "default_step")]
    pub step: String,
}

impl RangeConfig {
    /// Runs the generator over this configuration.
    pub fn generate(&self) -> range::RangeResult<Vec<TimeOfDay>> {
        range::generate_time_range(&self.from, &self.to, &self.step)
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSourceType {
    Json,
    Toml,
}

impl ConfigSourceType {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "json" => Ok(ConfigSourceType::Json),
            "toml" => Ok(ConfigSourceType::Toml),
            _ => anyhow::bail!("Unsupported config format: {}", extension),
        }
    }
}

/// Loader for picker range configurations
pub struct RangeConfigLoader;

impl RangeConfigLoader {
    /// Load a range configuration from a file (dispatches on extension).
    pub fn load_from_file(path: &Path) -> Result<RangeConfig> {
        let source_type = ConfigSourceType::from_path(path)?;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read range config: {}", path.display()))?;

        let config = match source_type {
            ConfigSourceType::Json => Self::load_from_json_str(&content)?,
            ConfigSourceType::Toml => Self::load_from_toml_str(&content)?,
        };

        log::debug!(
            "loaded range config {} -> {} step {} from {}",
            config.from,
            config.to,
            config.step,
            path.display()
        );
        Ok(config)
    }

    /// Load a range configuration from a JSON string.
    ///
    /// Deserializes through `serde_path_to_error` so a malformed field is
    /// reported with its path, matching the per-field framing the form layer
    /// wants.
    pub fn load_from_json_str(json_str: &str) -> Result<RangeConfig> {
        let de = &mut serde_json::Deserializer::from_str(json_str);
        let config: RangeConfig =
            serde_path_to_error::deserialize(de).context("Failed to parse range config JSON")?;
        Ok(config)
    }

    /// Load a range configuration from a TOML string.
    pub fn load_from_toml_str(toml_str: &str) -> Result<RangeConfig> {
        let config: RangeConfig =
            toml::from_str(toml_str).context("Failed to parse range config TOML")?;
        Ok(config)
    }
}
