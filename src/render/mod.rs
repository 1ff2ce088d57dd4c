//! Output of priced entries.

mod format;
mod table;

pub use format::format_price;
pub use table::ComparisonTable;

/// Output formats for the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// Markdown table
    Markdown,
    /// JSON report with raw figures
    Json,
}
