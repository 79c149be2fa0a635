//! Diagnostic logging setup
//!
//! Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
//! overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for normal runs
pub const DEFAULT_FILTER: &str = "budget_planner=warn";

/// Default filter with `--verbose`
pub const VERBOSE_FILTER: &str = "budget_planner=debug,info";

/// Install the global subscriber for the command-line binary
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Ignore the error when a subscriber is already installed (tests)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
