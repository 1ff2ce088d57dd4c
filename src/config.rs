//! User configuration.
//!
//! Stored at `~/.config/plancost/config.toml` and contains:
//! - default display currency
//! - exclusion keywords applied to every comparison
//! - an optional catalog file replacing the builtin plans

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::DisplayCurrency;

const CONFIG_DIR: &str = "plancost";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Display currency, or "original" for unconverted prices (default: GBP).
    #[serde(default)]
    pub currency: DisplayCurrency,

    /// Plans whose names contain any of these are hidden.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Catalog file used instead of the builtin plans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl UserConfig {
    /// Load config from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).context("Failed to read config file")?;

        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content).context("Failed to write config file")
    }

    /// Add an exclusion keyword. Returns false if it was already present.
    pub fn add_exclude(&mut self, keyword: &str) -> bool {
        if keyword.is_empty()
            || self
                .exclude
                .iter()
                .any(|k| k.to_lowercase() == keyword.to_lowercase())
        {
            return false;
        }
        self.exclude.push(keyword.to_string());
        true
    }

    /// Get the config file path.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Currency;

    #[test]
    fn test_default_config() {
        let config = UserConfig::default();
        assert_eq!(config.currency, DisplayCurrency::Converted(Currency::Gbp));
        assert!(config.exclude.is_empty());
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_add_exclude_dedupes() {
        let mut config = UserConfig::default();
        assert!(config.add_exclude("torbox"));
        assert!(!config.add_exclude("TorBox"));
        assert!(!config.add_exclude(""));
        assert!(config.add_exclude(" (pro"));
        assert_eq!(config.exclude, vec!["torbox".to_string(), " (pro".to_string()]);
    }

    #[test]
    fn test_serialize_deserialize() {
        let mut config = UserConfig::default();
        config.currency = DisplayCurrency::Original;
        config.add_exclude("put.io");

        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("currency = \"original\""));
        let parsed: UserConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let parsed: UserConfig = toml::from_str("").unwrap();
        assert_eq!(parsed, UserConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = UserConfig::default();
        config.currency = Currency::Eur.into();
        config.catalog = Some(PathBuf::from("/tmp/plans.toml"));
        config.save_to(&path).unwrap();

        assert_eq!(UserConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = UserConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, UserConfig::default());
    }
}
