//! Static currency conversion.

use std::collections::BTreeMap;

use tracing::warn;

use super::error::PricingError;
use crate::types::{Currency, DisplayCurrency};

/// Multiplicative rates keyed by source then target currency.
///
/// Neither symmetric nor complete: a source may be registered with no
/// outgoing rates at all, in which case it can be converted into but not out of.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionTable {
    rates: BTreeMap<Currency, BTreeMap<Currency, f64>>,
}

impl ConversionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The hardcoded rate set. GBP, AUD and CAD have no outgoing rates.
    pub fn builtin() -> Self {
        use Currency::*;

        let mut table = Self::new();
        table.add_source(Gbp);

        for (to, rate) in [(Usd, 1.0), (Aud, 1.5180), (Eur, 0.9194), (Gbp, 0.7723), (Cad, 1.3892)] {
            table.rates.entry(Usd).or_default().insert(to, rate);
        }
        for (to, rate) in [(Eur, 1.0), (Aud, 1.6516), (Gbp, 0.8404), (Usd, 1.0877), (Cad, 1.5123)] {
            table.rates.entry(Eur).or_default().insert(to, rate);
        }

        table.add_source(Aud);
        table.add_source(Cad);
        table
    }

    /// Register a source currency, with no outgoing rates if it is new.
    pub fn add_source(&mut self, from: Currency) {
        self.rates.entry(from).or_default();
    }

    pub fn set_rate(&mut self, from: Currency, to: Currency, rate: f64) -> Result<(), PricingError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(PricingError::InvalidRate { from, to, rate });
        }
        self.rates.entry(from).or_default().insert(to, rate);
        Ok(())
    }

    pub fn rate(&self, from: Currency, to: Currency) -> Result<f64, PricingError> {
        self.rates
            .get(&from)
            .and_then(|targets| targets.get(&to))
            .copied()
            .ok_or(PricingError::MissingRate { from, to })
    }

    /// Convert `amount` from `from` into the display currency.
    ///
    /// Same-currency and `Original` targets return the amount untouched. A
    /// missing rate is logged and yields `None`; no fallback rate is used.
    pub fn convert(&self, amount: f64, from: Currency, to: DisplayCurrency) -> Option<f64> {
        let Some(to) = to.target() else {
            return Some(amount);
        };
        if from == to {
            return Some(amount);
        }

        match self.rate(from, to) {
            Ok(rate) => Some(amount * rate),
            Err(err) => {
                warn!(%from, %to, "{}", err);
                None
            }
        }
    }

    /// Source currencies, always in `Currency` declaration order (GBP, USD,
    /// EUR, AUD, CAD) whatever order a catalog file listed its rates in.
    pub fn currencies(&self) -> impl Iterator<Item = Currency> + '_ {
        self.rates.keys().copied()
    }

    pub fn has_outgoing_rates(&self, from: Currency) -> bool {
        self.rates
            .get(&from)
            .is_some_and(|targets| targets.keys().any(|&to| to != from))
    }
}
