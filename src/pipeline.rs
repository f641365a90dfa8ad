use std::path::PathBuf;

use crate::{
    config::Config,
    errors::SummaryError,
    locator::find_sales_files,
    report::{render_report, write_report},
    sales::{collect_sales, grand_total, SalesTally, StoreFile},
    totals::append_total,
    utils::persistence::ensure_dir,
};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub grand_total: f64,
    pub files: Vec<StoreFile>,
    pub tally: SalesTally,
    pub totals_path: PathBuf,
    pub report_path: PathBuf,
}

/// Scans the stores tree, appends the grand total to the totals log, and
/// rewrites the report.
///
/// Bad sales files never fail the run. Errors creating the output directory or
/// writing either output file do. The totals line is written before the report.
pub fn run(config: &Config) -> Result<RunSummary, SummaryError> {
    ensure_dir(&config.output_dir)?;

    let paths = find_sales_files(&config.stores_dir);
    let files = collect_sales(&config.stores_dir, &paths);
    let total = grand_total(&files);
    let tally = SalesTally::from_files(&files);

    let totals_path = config.totals_path();
    append_total(&totals_path, total)?;

    let report_path = config.report_path();
    let report = render_report(total, &files, config);
    write_report(&report_path, &report)?;

    tracing::info!(
        grand_total = total,
        processed = tally.processed,
        skipped = tally.skipped(),
        report = %report_path.display(),
        "sales summary complete"
    );

    Ok(RunSummary {
        grand_total: total,
        files,
        tally,
        totals_path,
        report_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn run_writes_both_outputs() {
        let temp = tempdir().unwrap();
        let config = Config::in_dir(temp.path());
        fs::create_dir_all(config.stores_dir.join("north")).unwrap();
        fs::write(
            config.stores_dir.join("north").join("sales.json"),
            r#"{"total": 20}"#,
        )
        .unwrap();

        let summary = run(&config).unwrap();

        assert_eq!(summary.grand_total, 20.0);
        assert_eq!(summary.tally.processed, 1);
        assert_eq!(fs::read_to_string(&summary.totals_path).unwrap(), "20\n");
        assert!(fs::read_to_string(&summary.report_path)
            .unwrap()
            .contains("  north/sales.json: $20.00"));
    }

    #[test]
    fn report_failure_keeps_totals_line() {
        let temp = tempdir().unwrap();
        let config = Config::in_dir(temp.path());
        fs::create_dir_all(config.report_path()).unwrap();

        assert!(run(&config).is_err());
        assert_eq!(fs::read_to_string(config.totals_path()).unwrap(), "0\n");
    }
}
