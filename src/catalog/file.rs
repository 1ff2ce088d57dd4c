//! Catalog files (TOML, JSON, YAML).
//!
//! ```toml
//! [[plans]]
//! name = "Real-Debrid"
//! price = 16
//! duration = 180
//! currency = "EUR"
//! points_per_plan = 800
//! points_required_for_reward = 1000
//! duration_per_reward = 30
//!
//! [rates.USD]
//! GBP = 0.7723
//!
//! [rates.GBP]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::error::CatalogError;
use crate::pricing::ConversionTable;
use crate::types::{Currency, ServicePlan};

#[derive(Debug, Deserialize)]
pub(super) struct CatalogFile {
    pub plans: Vec<ServicePlan>,
    /// Source code -> target code -> rate. Replaces the builtin table when present.
    #[serde(default)]
    pub rates: Option<BTreeMap<String, BTreeMap<String, f64>>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

pub(super) fn read_catalog_file(path: &Path) -> Result<CatalogFile, CatalogError> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path)?;

    let file: CatalogFile = match format {
        Format::Toml => toml::from_str(&content)?,
        Format::Json => serde_json::from_str(&content)?,
        Format::Yaml => serde_yaml::from_str(&content)?,
    };

    Ok(file)
}

/// Build a conversion table from string-keyed rates, keeping empty sources.
pub(super) fn parse_rates(
    raw: &BTreeMap<String, BTreeMap<String, f64>>,
) -> Result<ConversionTable, CatalogError> {
    let mut table = ConversionTable::new();

    for (from, targets) in raw {
        let from = parse_currency(from)?;
        table.add_source(from);

        for (to, &rate) in targets {
            table.set_rate(from, parse_currency(to)?, rate)?;
        }
    }

    Ok(table)
}

fn parse_currency(code: &str) -> Result<Currency, CatalogError> {
    code.parse()
        .map_err(|_| CatalogError::UnknownCurrency(code.to_string()))
}
