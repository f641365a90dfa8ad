#![doc(test(attr(deny(warnings))))]

//! Sales Summary scans a tree of per-store `sales.json` files, appends the grand
//! total to a running totals log, and writes a human-readable sales report.

pub mod config;
pub mod currency;
pub mod errors;
pub mod locator;
pub mod pipeline;
pub mod report;
pub mod sales;
pub mod totals;
pub mod utils;

pub use config::Config;
pub use errors::SummaryError;
pub use pipeline::{run, RunSummary};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Sales Summary tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
