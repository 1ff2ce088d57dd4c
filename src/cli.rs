//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{CompareCmd, ConfigCmd, CurrenciesCmd, PlansCmd};

#[derive(Parser)]
#[command(name = "plancost")]
#[command(about = "Compare subscription plan costs across currencies and loyalty rewards")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show plans side by side, cheapest per year first
    Compare(CompareCmd),

    /// List currencies prices can be displayed in
    Currencies(CurrenciesCmd),

    /// List the plans in the catalog
    Plans(PlansCmd),

    /// Manage configuration (display currency, exclusions, catalog)
    Config(ConfigCmd),
}

impl Command {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Command::Compare(cmd) => cmd.run(),
            Command::Currencies(cmd) => cmd.run(),
            Command::Plans(cmd) => cmd.run(),
            Command::Config(cmd) => cmd.run(),
        }
    }
}
