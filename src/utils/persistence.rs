use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::SummaryError;

const TMP_SUFFIX: &str = "tmp";

pub fn ensure_dir(path: &Path) -> Result<(), SummaryError> {
    fs::create_dir_all(path).map_err(|err| SummaryError::io_at(path, err))
}

/// Sibling staging path: `salesReport.txt` becomes `salesReport.txt.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Replaces `path` with `data` by staging to a temporary file and renaming it into place.
pub fn write_atomic(path: &Path, data: &str) -> Result<(), SummaryError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let staged = File::create(&tmp).and_then(|mut file| {
        file.write_all(data.as_bytes())?;
        file.flush()?;
        file.sync_all()
    });
    if let Err(err) = staged {
        let _ = fs::remove_file(&tmp);
        return Err(SummaryError::io_at(&tmp, err));
    }
    fs::rename(&tmp, path).map_err(|err| {
        let _ = fs::remove_file(&tmp);
        SummaryError::io_at(path, err)
    })
}
