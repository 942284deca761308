use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::i18n::Language;
use crate::units::Unit;

const ENV_PREFIX: &str = "TIMECONV";
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Startup state of the converter screen.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct UiConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub unit: Unit,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        let level = self.level.trim().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}', expected one of: {}",
                self.level,
                LOG_LEVELS.join(", ")
            );
        }
        Ok(())
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        Ok(())
    }
}

/// Default location: `~/.timeconv/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".timeconv").join("config.toml"))
}

fn build(path: Option<&Path>, required: bool) -> Result<Config> {
    let mut builder = ConfigBuilder::builder();
    if let Some(path) = path {
        builder = builder.add_source(
            File::from(path)
                .format(FileFormat::Toml)
                .required(required),
        );
    }
    let loader = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;
    config.validate()?;
    Ok(config)
}

/// Loads an explicit config file. The file must exist.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    build(Some(path), true).with_context(|| format!("Failed to load {}", path.display()))
}

/// Loads `override_path` if given, else the default file if present.
/// Environment variables (`TIMECONV_UI__LANGUAGE=pl`) override both.
pub fn load(override_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = override_path {
        return load_from_path(path);
    }
    build(default_path().as_deref(), false)
}

/// The file `load` reads for the given override, if any.
pub fn resolve_path(override_path: Option<&Path>) -> Option<PathBuf> {
    override_path.map(Path::to_path_buf).or_else(default_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.language, Language::En);
        assert_eq!(config.ui.unit, Unit::Second);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let config = Config {
            logging: LoggingConfig {
                level: "loud".to_string(),
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_path_prefers_override() {
        let custom = Path::new("/tmp/custom.toml");
        assert_eq!(resolve_path(Some(custom)), Some(custom.to_path_buf()));
        assert_eq!(resolve_path(None), default_path());
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let logging = LoggingConfig {
            level: "DEBUG".to_string(),
        };
        assert!(logging.validate().is_ok());
    }
}
