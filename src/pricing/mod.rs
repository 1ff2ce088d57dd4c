//! Price normalization: currency conversion, reward amortization and ordering.
//!
//! Everything here is pure. Given the same catalog, rates and display
//! currency the output is identical, apart from the warnings logged for
//! missing conversion rates.

mod convert;
mod error;
mod normalize;
mod sort;

pub use convert::ConversionTable;
pub use error::PricingError;
use normalize::normalize_all;
use sort::sort_entries;

use crate::types::{DisplayCurrency, PricedEntry, ServicePlan};

/// Normalize every plan and sort the result for display.
pub fn price_catalog(
    plans: &[ServicePlan],
    display: DisplayCurrency,
    table: &ConversionTable,
) -> Vec<PricedEntry> {
    let mut entries = normalize_all(plans, display, table);
    sort_entries(&mut entries, display);
    entries
}
