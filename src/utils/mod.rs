use std::sync::Once;

/// Environment variable holding the log filter, e.g. `pocket_ledger=debug`
pub const LOG_ENV: &str = "POCKET_LEDGER_LOG";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber; logs go to stderr so report
/// output on stdout stays clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another subscriber may already be installed by an embedding application.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
