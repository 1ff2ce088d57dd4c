use crate::types::Currency;

/// `<symbol><amount to 2 decimals>`, or an empty string for absent figures.
pub fn format_price(value: Option<f64>, currency: Currency) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}{:.2}", currency.symbol(), v),
        _ => String::new(),
    }
}
