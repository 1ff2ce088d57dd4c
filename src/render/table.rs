//! Comparison table rendering.

use serde::Serialize;

use super::format::format_price;
use crate::types::{Currency, DisplayCurrency, PricedEntry};

const POINTS_ANNOTATION: &str = "(w/ fidelity points)";

/// Formatted rows ready for output.
#[derive(Debug, Clone)]
pub struct ComparisonTable {
    display: DisplayCurrency,
    rows: Vec<[String; 6]>,
}

/// JSON report shape.
#[derive(Debug, Serialize)]
struct Report<'a> {
    display_currency: Option<Currency>,
    entries: &'a [PricedEntry],
}

impl ComparisonTable {
    /// Format already sorted entries.
    pub fn new(entries: &[PricedEntry], display: DisplayCurrency) -> Self {
        let rows = entries
            .iter()
            .map(|entry| {
                let shown_in = display.resolve(entry.currency);
                let name = if entry.points_used {
                    format!("{} {}", entry.name, POINTS_ANNOTATION)
                } else {
                    entry.name.clone()
                };

                [
                    name,
                    format_price(entry.price_per_year, shown_in),
                    format_price(entry.price_per_month, shown_in),
                    format_price(entry.price_per_day, shown_in),
                    format_price(Some(entry.price), entry.currency),
                    entry.duration.to_string(),
                ]
            })
            .collect();

        Self { display, rows }
    }

    pub fn headers(&self) -> [String; 6] {
        let suffix = match self.display.target() {
            Some(c) => format!(" ({})", c),
            None => String::new(),
        };

        [
            "Service".to_string(),
            format!("Price/Year{}", suffix),
            format!("Price/Month{}", suffix),
            format!("Price/Day{}", suffix),
            "Plan Price".to_string(),
            "Plan Duration (Days)".to_string(),
        ]
    }

    /// Column-aligned plain text. Name column left-aligned, figures right-aligned.
    pub fn render_text(&self) -> String {
        let headers = self.headers();
        let mut widths = headers.clone().map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_line(&mut out, &headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(rule.join("  ").trim_end());
        out.push('\n');
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }
        out
    }

    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("| {} |\n", self.headers().join(" | ")));
        out.push_str("|---|---:|---:|---:|---:|---:|\n");
        for row in &self.rows {
            out.push_str(&format!("| {} |\n", row.join(" | ")));
        }
        out
    }

    /// Raw figures as JSON; absent values are `null`.
    pub fn render_json(entries: &[PricedEntry], display: DisplayCurrency) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Report {
            display_currency: display.target(),
            entries,
        })
    }
}

fn push_line(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let pad = width.saturating_sub(cell.chars().count());
        if i == 0 {
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
        } else {
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
