//! Runtime setup: diagnostic logging.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a tracing filter directive.
pub fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// The filter comes from the verbosity flag only; stdout stays reserved for
/// the interactive transcript.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::new(log_filter(verbosity));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(e) = result {
        // Already installed (e.g. by a test harness)
        eprintln!("Note: logging already configured: {}", e);
    }
}
