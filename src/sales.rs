//! Reading and tallying per-store `sales.json` files.
//!
//! Every file is read and parsed once into a [`StoreFile`]. The grand total and
//! the report are both derived from that list.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{de::Error as _, Deserialize};
use serde_json::Value;

use crate::locator::display_name;

/// Parsed content of one store's `sales.json`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SalesRecord {
    pub total: f64,
}

impl SalesRecord {
    /// Parses `{"total": <number>}`. Extra fields are ignored; `total` is required.
    ///
    /// Only a JSON object is accepted. Serde would otherwise read `[5]` as a
    /// positional record.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// What happened to a single sales file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Processed(SalesRecord),
    Empty,
    ParseError(String),
    ReadError(String),
}

impl FileOutcome {
    /// Amount this file adds to the grand total.
    pub fn contribution(&self) -> f64 {
        match self {
            FileOutcome::Processed(record) => record.total,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreFile {
    pub path: PathBuf,
    pub display_name: String,
    pub outcome: FileOutcome,
}

/// Per-outcome counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalesTally {
    pub processed: usize,
    pub empty: usize,
    pub parse_errors: usize,
    pub read_errors: usize,
}

impl SalesTally {
    pub fn from_files(files: &[StoreFile]) -> Self {
        files
            .iter()
            .fold(SalesTally::default(), |mut tally, file| {
                match file.outcome {
                    FileOutcome::Processed(_) => tally.processed += 1,
                    FileOutcome::Empty => tally.empty += 1,
                    FileOutcome::ParseError(_) => tally.parse_errors += 1,
                    FileOutcome::ReadError(_) => tally.read_errors += 1,
                }
                tally
            })
    }

    pub fn skipped(&self) -> usize {
        self.empty + self.parse_errors + self.read_errors
    }
}

/// Reads one file and classifies it, logging a single diagnostic line.
///
/// Only I/O failures count as read errors. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD and left for the JSON parser to reject. A leading
/// byte-order mark is dropped.
pub fn read_sales_file(path: &Path) -> FileOutcome {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(file = %path.display(), error = %err, "error reading sales file");
            return FileOutcome::ReadError(err.to_string());
        }
    };
    let decoded = String::from_utf8_lossy(&bytes);
    let text = decoded.strip_prefix('\u{feff}').unwrap_or(&*decoded);

    if text.trim().is_empty() {
        tracing::warn!(file = %path.display(), "sales file is empty");
        return FileOutcome::Empty;
    }

    match SalesRecord::from_json(text) {
        Ok(record) => {
            tracing::info!(file = %path.display(), total = record.total, "processed sales file");
            FileOutcome::Processed(record)
        }
        Err(err) => {
            tracing::error!(file = %path.display(), error = %err, "failed to parse sales JSON");
            FileOutcome::ParseError(err.to_string())
        }
    }
}

/// Reads every located file in order. `root` only shapes the display names.
pub fn collect_sales(root: &Path, files: &[PathBuf]) -> Vec<StoreFile> {
    files
        .iter()
        .map(|path| StoreFile {
            path: path.clone(),
            display_name: display_name(root, path),
            outcome: read_sales_file(path),
        })
        .collect()
}

pub fn grand_total(files: &[StoreFile]) -> f64 {
    files
        .iter()
        .fold(0.0, |sum, file| sum + file.outcome.contribution())
}

/// Sums the valid totals of `files`; problem files contribute zero.
pub fn calculate_sales_total(files: &[PathBuf]) -> f64 {
    files
        .iter()
        .fold(0.0, |sum, path| sum + read_sales_file(path).contribution())
}
