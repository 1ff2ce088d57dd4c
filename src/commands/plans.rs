//! Plans command - list catalog plans.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::{exclusion_keywords, load_catalog};
use crate::config::UserConfig;
use crate::render::format_price;

#[derive(Args)]
pub struct PlansCmd {
    /// Hide plans whose name contains this keyword (case-insensitive, repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Catalog file (TOML, JSON or YAML) to use instead of the builtin plans
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Ignore exclusions from the config file
    #[arg(long)]
    pub all: bool,
}

impl PlansCmd {
    pub fn run(&self) -> Result<()> {
        let config = UserConfig::load()?;

        let saved = (!self.all).then_some(&config);
        let keywords = exclusion_keywords(saved, &self.exclude);

        let catalog = load_catalog(self.catalog.as_deref(), &config)?.excluding(&keywords);

        if catalog.plans.is_empty() {
            println!("No plans in catalog.");
            return Ok(());
        }

        for plan in &catalog.plans {
            print!(
                "{}: {} for {} days",
                plan.name,
                format_price(Some(plan.price), plan.currency),
                plan.duration
            );
            if let Some(program) = plan.reward_program() {
                print!(
                    " [{} points/plan, {} points -> {} days]",
                    program.points_per_plan, program.points_required, program.duration_per_reward
                );
            }
            println!();
        }

        println!("\n{} plans", catalog.plans.len());

        Ok(())
    }
}
