//! Plan catalog: the builtin dataset, catalog files and keyword exclusion.

mod builtin;
mod error;
mod file;
mod filter;

pub use builtin::builtin_plans;
pub use error::CatalogError;
pub use filter::exclude;

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::pricing::ConversionTable;
use crate::types::ServicePlan;

/// Plans together with the rates used to compare them.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub plans: Vec<ServicePlan>,
    pub rates: ConversionTable,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            plans: builtin_plans(),
            rates: ConversionTable::builtin(),
        }
    }

    /// Load a catalog file. Without a `rates` section the builtin rates apply.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let file = file::read_catalog_file(path)?;

        let rates = match &file.rates {
            Some(raw) => file::parse_rates(raw)?,
            None => ConversionTable::builtin(),
        };

        let catalog = Self {
            plans: file.plans,
            rates,
        };
        catalog.validate()?;

        debug!(path = %path.display(), plans = catalog.plans.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Load from `path` if given, otherwise the builtin catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Check plan invariants. Incomplete reward fields only warn.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();

        for plan in &self.plans {
            let invalid = |reason: &str| CatalogError::InvalidPlan {
                name: plan.name.clone(),
                reason: reason.to_string(),
            };

            if plan.name.trim().is_empty() {
                return Err(invalid("name is empty"));
            }
            if !seen.insert(plan.name.as_str()) {
                return Err(CatalogError::DuplicatePlan(plan.name.clone()));
            }
            if !plan.price.is_finite() || plan.price <= 0.0 {
                return Err(invalid("price must be positive"));
            }
            if plan.duration == 0 {
                return Err(invalid("duration must be positive"));
            }
            if plan.has_partial_rewards() {
                warn!(plan = %plan.name, "incomplete reward fields, points entry skipped");
            }
        }

        Ok(())
    }

    /// Remove plans matching any exclusion keyword.
    pub fn excluding<S: AsRef<str>>(self, keywords: &[S]) -> Self {
        Self {
            plans: exclude(self.plans, keywords),
            rates: self.rates,
        }
    }
}
