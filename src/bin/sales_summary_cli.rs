use std::{env, process};

use sales_summary::{init, run, Config};

fn main() {
    init();

    if env::args().len() > 1 {
        print_usage();
        process::exit(1);
    }

    if let Err(err) = run_cli() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let summary = run(&config)?;
    println!(
        "Processed {} sales file(s); report written to {}",
        summary.files.len(),
        summary.report_path.display()
    );
    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage: sales_summary_cli\n\
         Scans ./stores for sales.json files and writes ./salesTotalDir/totals.txt\n\
         and ./salesTotalDir/salesReport.txt. Takes no arguments.\n\
         Environment:\n  \
         SALES_SUMMARY_STORES_DIR   override the stores directory\n  \
         SALES_SUMMARY_OUTPUT_DIR   override the output directory\n  \
         SALES_SUMMARY_CURRENCY     three-letter currency code for the report (default USD)\n  \
         RUST_LOG                   log filter (default sales_summary=info)"
    );
}
