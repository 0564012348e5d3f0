use crate::domain::build::MINIMUM_ACCEPTABLE_BUILD;
use crate::domain::Severity;
use crate::error::{ChannelTagError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "channeltag.toml";

/// Represents the complete configuration for channel-tag.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tagging: TaggingConfig,

    #[serde(default)]
    pub compatibility: CompatibilityConfig,
}

fn default_severity() -> String {
    "patch".to_string()
}

fn default_minimum_build() -> u32 {
    MINIMUM_ACCEPTABLE_BUILD
}

/// How new tags are derived.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TaggingConfig {
    /// none, patch, minor, major or an explicit N.N.N
    #[serde(default = "default_severity")]
    pub default_severity: String,

    /// Start at 1.0.0 when the latest tag has no number
    #[serde(default)]
    pub create_when_missing: bool,
}

impl Default for TaggingConfig {
    fn default() -> Self {
        TaggingConfig {
            default_severity: default_severity(),
            create_when_missing: false,
        }
    }
}

impl TaggingConfig {
    /// Parsed `default_severity`.
    pub fn severity(&self) -> Result<Severity> {
        self.default_severity.parse().map_err(|e| {
            ChannelTagError::config(format!("tagging.default_severity: {}", e))
        })
    }
}

/// Editor build compatibility checks.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CompatibilityConfig {
    #[serde(default = "default_minimum_build")]
    pub minimum_build: u32,
}

impl Default for CompatibilityConfig {
    fn default() -> Self {
        CompatibilityConfig {
            minimum_build: default_minimum_build(),
        }
    }
}

/// Parse configuration text and validate it.
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(text).map_err(|e| ChannelTagError::config(e.to_string()))?;
    config.tagging.severity()?;
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `channeltag.toml` in current directory
/// 3. `.channeltag.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE).exists() {
        fs::read_to_string(CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tagging.default_severity, "patch");
        assert!(!config.tagging.create_when_missing);
        assert_eq!(config.compatibility.minimum_build, 3092);
        assert_eq!(config.tagging.severity().unwrap(), Severity::Patch);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse_config("[tagging]\ncreate_when_missing = true\n").unwrap();
        assert!(config.tagging.create_when_missing);
        assert_eq!(config.tagging.default_severity, "patch");
        assert_eq!(config.compatibility.minimum_build, 3092);
    }

    #[test]
    fn test_invalid_severity_is_a_config_error() {
        let err = parse_config("[tagging]\ndefault_severity = \"2.5\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(parse_config("[tagging\n").is_err());
    }
}
