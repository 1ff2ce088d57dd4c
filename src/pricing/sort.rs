//! Ordering of priced entries.

use std::cmp::Ordering;

use crate::types::{DisplayCurrency, PricedEntry};

/// Sort entries for display.
///
/// With a display currency, cheapest yearly cost first and entries without a
/// yearly cost last. In original-currency mode figures are not comparable, so
/// entries are ordered by name. Both sorts are stable.
pub fn sort_entries(entries: &mut [PricedEntry], display: DisplayCurrency) {
    match display {
        DisplayCurrency::Converted(_) => {
            entries.sort_by(|a, b| compare_yearly(a.price_per_year, b.price_per_year))
        }
        DisplayCurrency::Original => entries.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
}

fn compare_yearly(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
