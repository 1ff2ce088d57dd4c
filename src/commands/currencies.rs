//! Currencies command - list the selectable display currencies.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::load_catalog;
use crate::config::UserConfig;
use crate::types::DisplayCurrency;

#[derive(Args)]
pub struct CurrenciesCmd {
    /// Catalog file whose rate table should be listed
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

impl CurrenciesCmd {
    pub fn run(&self) -> Result<()> {
        let config = UserConfig::load()?;
        let catalog = load_catalog(self.catalog.as_deref(), &config)?;

        let marker = |option: DisplayCurrency| if option == config.currency { " *" } else { "" };

        for currency in catalog.rates.currencies() {
            let note = if catalog.rates.has_outgoing_rates(currency) {
                ""
            } else {
                " (display only)"
            };
            println!(
                "{}  {}{}{}",
                currency,
                currency.symbol(),
                note,
                marker(currency.into())
            );
        }
        println!("original{}", marker(DisplayCurrency::Original));

        Ok(())
    }
}
