//! Pricing errors.

use thiserror::Error;

use crate::types::Currency;

#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("conversion rate from {from} to {to} not found")]
    MissingRate { from: Currency, to: Currency },

    #[error("invalid conversion rate {rate} from {from} to {to}")]
    InvalidRate {
        from: Currency,
        to: Currency,
        rate: f64,
    },
}
