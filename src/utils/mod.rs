pub mod persistence;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Falls back to `sales_summary=info` when `RUST_LOG` is unset or invalid.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sales_summary=info"));

        let _ = fmt().with_env_filter(filter).with_target(false).try_init();
    });
}
