//! Core domain types: currencies, catalog plans and priced entries.

mod currency;
mod plan;

pub use currency::*;
pub use plan::*;
