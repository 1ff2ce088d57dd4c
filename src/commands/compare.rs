//! Compare command - render the plan cost comparison.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use super::{exclusion_keywords, load_catalog};
use crate::config::UserConfig;
use crate::pricing;
use crate::render::{ComparisonTable, OutputFormat};
use crate::types::DisplayCurrency;

#[derive(Args)]
pub struct CompareCmd {
    /// Display currency (GBP, USD, EUR, AUD, CAD) or "original" for unconverted prices
    #[arg(short, long, env = "PLANCOST_CURRENCY")]
    pub currency: Option<DisplayCurrency>,

    /// Hide plans whose name contains this keyword (case-insensitive, repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Catalog file (TOML, JSON or YAML) to use instead of the builtin plans
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl CompareCmd {
    pub fn run(&self) -> Result<()> {
        let config = UserConfig::load()?;
        let shown = self.currency.unwrap_or(config.currency);

        let keywords = exclusion_keywords(Some(&config), &self.exclude);
        let catalog = load_catalog(self.catalog.as_deref(), &config)?.excluding(&keywords);
        debug!(display = %shown, plans = catalog.plans.len(), "pricing catalog");

        let entries = pricing::price_catalog(&catalog.plans, shown, &catalog.rates);

        match self.format {
            OutputFormat::Table => {
                if entries.is_empty() {
                    println!("No plans to compare.");
                    return Ok(());
                }
                print!("{}", ComparisonTable::new(&entries, shown).render_text());
            }
            OutputFormat::Markdown => {
                print!("{}", ComparisonTable::new(&entries, shown).render_markdown());
            }
            OutputFormat::Json => {
                let json = ComparisonTable::render_json(&entries, shown)
                    .context("Failed to serialize comparison")?;
                println!("{}", json);
            }
        }

        Ok(())
    }
}
