//! Config command - manage user configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::catalog::Catalog;
use crate::config::UserConfig;
use crate::types::DisplayCurrency;

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub command: ConfigSubCmd,
}

#[derive(Subcommand)]
pub enum ConfigSubCmd {
    /// Set the default display currency (default: GBP)
    SetCurrency(SetCurrencyCmd),

    /// Use a catalog file instead of the builtin plans
    SetCatalog(SetCatalogCmd),

    /// Always hide plans matching a keyword
    Exclude(ExcludeCmd),

    /// Remove all saved exclusion keywords
    ClearExcludes,

    /// Show current configuration
    Show,
}

#[derive(Args)]
pub struct SetCurrencyCmd {
    /// Currency code, or "original" for unconverted prices
    pub currency: DisplayCurrency,
}

#[derive(Args)]
pub struct SetCatalogCmd {
    /// Path to a TOML, JSON or YAML catalog
    pub path: PathBuf,
}

#[derive(Args)]
pub struct ExcludeCmd {
    /// Case-insensitive keyword matched against plan names
    pub keyword: String,
}

impl ConfigCmd {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            ConfigSubCmd::SetCurrency(cmd) => {
                let mut config = UserConfig::load()?;
                config.currency = cmd.currency;
                config.save()?;
                println!("Display currency set to: {}", cmd.currency);
            }
            ConfigSubCmd::SetCatalog(cmd) => {
                let path = resolve_catalog_path(&cmd.path)?;
                let mut config = UserConfig::load()?;
                config.catalog = Some(path.clone());
                config.save()?;
                println!("Catalog set to: {}", path.display());
            }
            ConfigSubCmd::Exclude(cmd) => {
                let mut config = UserConfig::load()?;
                if config.add_exclude(&cmd.keyword) {
                    config.save()?;
                    println!("Excluding plans matching: {:?}", cmd.keyword);
                } else {
                    println!("Keyword already excluded or empty.");
                }
            }
            ConfigSubCmd::ClearExcludes => {
                let mut config = UserConfig::load()?;
                config.exclude.clear();
                config.save()?;
                println!("Exclusions cleared.");
            }
            ConfigSubCmd::Show => {
                let config = UserConfig::load()?;
                println!("Config: {}", UserConfig::config_path()?.display());
                println!();
                println!("currency:   {}", config.currency);
                println!(
                    "exclude:    {}",
                    if config.exclude.is_empty() {
                        "(none)".to_string()
                    } else {
                        config.exclude.join(", ")
                    }
                );
                println!(
                    "catalog:    {}",
                    config
                        .catalog
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(builtin)".to_string())
                );
            }
        }
        Ok(())
    }
}

/// Absolute path of a catalog that loads cleanly, so later runs work from any directory.
fn resolve_catalog_path(path: &Path) -> Result<PathBuf> {
    let path = path
        .canonicalize()
        .with_context(|| format!("Catalog file not found: {}", path.display()))?;

    Catalog::load(&path).with_context(|| format!("Failed to load catalog {}", path.display()))?;

    Ok(path)
}
