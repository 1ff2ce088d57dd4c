//! CLI command implementations.

mod compare;
mod config;
mod currencies;
mod plans;

pub use compare::CompareCmd;
pub use config::ConfigCmd;
pub use currencies::CurrenciesCmd;
pub use plans::PlansCmd;

use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::Catalog;
use crate::config::UserConfig;

/// Catalog from the `--catalog` flag, else the configured file, else builtin.
fn load_catalog(flag: Option<&Path>, config: &UserConfig) -> Result<Catalog> {
    let path = flag.or(config.catalog.as_deref());

    Catalog::load_or_builtin(path).with_context(|| match path {
        Some(p) => format!("Failed to load catalog {}", p.display()),
        None => "Failed to load builtin catalog".to_string(),
    })
}

/// Saved exclusions (when given) followed by the ones passed on the command line.
fn exclusion_keywords(config: Option<&UserConfig>, flags: &[String]) -> Vec<String> {
    config
        .map(|c| c.exclude.as_slice())
        .unwrap_or_default()
        .iter()
        .chain(flags)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_catalog(dir: &Path, file: &str, plan: &str) -> PathBuf {
        let path = dir.join(file);
        let content = format!(
            r#"{{"plans": [{{"name": "{}", "price": 5, "duration": 30, "currency": "USD"}}]}}"#,
            plan
        );
        std::fs::write(&path, content).unwrap();
        path
    }

    fn plan_names(catalog: &Catalog) -> Vec<&str> {
        catalog.plans.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_load_catalog_prefers_flag() {
        let dir = tempfile::tempdir().unwrap();
        let flag = write_catalog(dir.path(), "flag.json", "From Flag");
        let saved = write_catalog(dir.path(), "saved.json", "From Config");

        let config = UserConfig {
            catalog: Some(saved),
            ..UserConfig::default()
        };

        let catalog = load_catalog(Some(&flag), &config).unwrap();
        assert_eq!(plan_names(&catalog), vec!["From Flag"]);
    }

    #[test]
    fn test_load_catalog_falls_back_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let saved = write_catalog(dir.path(), "saved.json", "From Config");

        let config = UserConfig {
            catalog: Some(saved),
            ..UserConfig::default()
        };

        let catalog = load_catalog(None, &config).unwrap();
        assert_eq!(plan_names(&catalog), vec!["From Config"]);
    }

    #[test]
    fn test_load_catalog_defaults_to_builtin() {
        let catalog = load_catalog(None, &UserConfig::default()).unwrap();
        assert_eq!(catalog.plans.len(), 10);
    }

    #[test]
    fn test_load_catalog_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let err = load_catalog(Some(&missing), &UserConfig::default()).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_exclusion_keywords_merge_config_then_flags() {
        let config = UserConfig {
            exclude: vec!["torbox".to_string()],
            ..UserConfig::default()
        };
        let flags = vec!["put.io".to_string()];

        assert_eq!(
            exclusion_keywords(Some(&config), &flags),
            vec!["torbox".to_string(), "put.io".to_string()]
        );
        assert_eq!(exclusion_keywords(None, &flags), flags);
        assert!(exclusion_keywords(None, &[]).is_empty());
    }

    #[test]
    fn test_merged_keywords_filter_catalog() {
        let config = UserConfig {
            exclude: vec!["torbox".to_string()],
            ..UserConfig::default()
        };
        let keywords = exclusion_keywords(Some(&config), &["put.io".to_string()]);

        let catalog = load_catalog(None, &config).unwrap().excluding(&keywords);
        assert_eq!(catalog.plans.len(), 5);
    }
}
