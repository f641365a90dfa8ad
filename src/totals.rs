use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
};

use crate::{currency::format_plain_total, errors::SummaryError, utils::persistence::ensure_dir};

/// Appends one `<total>\n` line to the totals log, creating it if needed.
pub fn append_total(path: &Path, total: f64) -> Result<(), SummaryError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| SummaryError::io_at(path, err))?;
    writeln!(file, "{}", format_plain_total(total)).map_err(|err| SummaryError::io_at(path, err))?;
    file.flush().map_err(|err| SummaryError::io_at(path, err))?;
    Ok(())
}

/// Reads the recorded run totals, oldest first. A missing log is empty history.
pub fn read_totals(path: &Path) -> Result<Vec<f64>, SummaryError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(SummaryError::io_at(path, err)),
    };
    let mut totals = Vec::new();
    for (index, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<f64>() {
            Ok(value) => totals.push(value),
            Err(_) => tracing::warn!(
                file = %path.display(),
                line = index + 1,
                content = line,
                "ignoring unparsable totals line"
            ),
        }
    }
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn appends_without_truncating() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("out").join("totals.txt");

        append_total(&path, 150.0).unwrap();
        append_total(&path, 100.5).unwrap();
        append_total(&path, 0.0).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "150\n100.5\n0\n");
        assert_eq!(read_totals(&path).unwrap(), vec![150.0, 100.5, 0.0]);
    }

    #[test]
    fn missing_log_reads_as_empty_history() {
        let temp = tempdir().unwrap();
        assert!(read_totals(&temp.path().join("totals.txt")).unwrap().is_empty());
    }

    #[test]
    fn garbage_lines_are_skipped() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("totals.txt");
        fs::write(&path, "12\nhello\n\n7.25\n").unwrap();
        assert_eq!(read_totals(&path).unwrap(), vec![12.0, 7.25]);
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("totals.txt");
        fs::create_dir_all(&path).unwrap();
        assert!(matches!(
            append_total(&path, 1.0),
            Err(SummaryError::IoAt { .. })
        ));
    }
}
