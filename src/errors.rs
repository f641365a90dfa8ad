use std::path::PathBuf;

use thiserror::Error;

/// Error type for failures that abort a summary run.
///
/// Per-file problems with store sales files are not errors at this level; they
/// are recorded as [`crate::sales::FileOutcome`] variants and the run carries on.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("IO error at `{}`: {source}", path.display())]
    IoAt {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SummaryError {
    pub fn io_at(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SummaryError::IoAt {
            path: path.into(),
            source,
        }
    }
}
