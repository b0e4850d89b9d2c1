//! Logging setup
//!
//! Console output goes to stderr so `brewbook highlight` can pipe clean
//! HTML on stdout. Filter it with RUST_LOG:
//! - `RUST_LOG=debug` - every per-file decision
//! - `RUST_LOG=brewbook::catalog=debug` - only discovery
//! - `RUST_LOG=brewbook::syntax=trace` - one line per highlighted source
//!
//! A second layer writes `~/.config/brewbook/logs/brewbook.log.<date>` at
//! debug level. If the logs directory can't be created, only the console
//! layer is installed.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "brewbook.log";

/// Console level used when RUST_LOG is unset
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

/// Install console and file logging
///
/// Does nothing (beyond a note on stderr) if a subscriber is already set.
pub fn init(verbose: bool) {
    if let Err(e) = try_init(verbose) {
        eprintln!("Warning: logging already initialized: {}", e);
    }
}

pub fn try_init(verbose: bool) -> Result<(), TryInitError> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .with_filter(console_filter);

    let file_layer = crate::config_paths::ensure_logs_dir()
        .map_err(|e| eprintln!("Warning: file logging disabled: {}", e))
        .ok()
        .map(|logs_dir| {
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug"))
        });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
}
