use std::path::{Path, PathBuf};

use walkdir::WalkDir;

pub const SALES_FILE_NAME: &str = "sales.json";

/// Collects every `sales.json` below `root`, at any depth, sorted by path.
///
/// A missing root yields an empty list. Directories that cannot be read are
/// logged and skipped so one bad folder does not hide the rest of the tree.
pub fn find_sales_files(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        tracing::warn!(root = %root.display(), "stores directory not found; no sales files to process");
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry while scanning stores");
                continue;
            }
        };
        if entry.file_name() != SALES_FILE_NAME {
            continue;
        }
        let path = entry.path();
        if path.is_file() {
            files.push(path.to_path_buf());
        }
    }
    tracing::debug!(root = %root.display(), count = files.len(), "located sales files");
    files
}

/// Name shown in the report: the path relative to `root`, `/`-separated.
pub fn display_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|part| part.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
