//! Catalog loading errors.

use thiserror::Error;

use crate::pricing::PricingError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("duplicate plan: {0}")]
    DuplicatePlan(String),

    #[error("invalid plan {name}: {reason}")]
    InvalidPlan { name: String, reason: String },

    #[error(transparent)]
    Rate(#[from] PricingError),
}
