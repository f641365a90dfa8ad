use std::{fmt::Write as _, path::Path};

use crate::{
    config::Config,
    currency::format_currency_value,
    errors::SummaryError,
    sales::{FileOutcome, StoreFile},
    utils::persistence::write_atomic,
};

pub const TITLE: &str = "Sales Summary";
pub const SEPARATOR: &str = "----------------------------";

/// Builds the summary document for one run.
pub fn render_report(total: f64, files: &[StoreFile], config: &Config) -> String {
    let money = |amount: f64| {
        format_currency_value(amount, &config.currency, &config.locale, &config.format)
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", SEPARATOR);
    let _ = writeln!(out, "Total Sales: {}", money(total));
    let _ = writeln!(out);
    let _ = writeln!(out, "Details:");
    for file in files {
        let detail = match &file.outcome {
            FileOutcome::Processed(record) => money(record.total),
            FileOutcome::Empty => "Empty file".to_string(),
            FileOutcome::ParseError(_) => "Error parsing JSON".to_string(),
            FileOutcome::ReadError(_) => "Error reading file".to_string(),
        };
        let _ = writeln!(out, "  {}: {}", file.display_name, detail);
    }
    out
}

/// Overwrites the report at `path`; a failed write leaves the previous report intact.
pub fn write_report(path: &Path, contents: &str) -> Result<(), SummaryError> {
    write_atomic(path, contents)?;
    tracing::debug!(file = %path.display(), bytes = contents.len(), "wrote sales report");
    Ok(())
}
