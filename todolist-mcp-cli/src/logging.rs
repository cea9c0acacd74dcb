//! Tracing setup.
//!
//! stdout carries the MCP stream, so logs always go to stderr without ANSI
//! colours.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `--debug` nor `RUST_LOG` is given
pub const DEFAULT_FILTER: &str = "info,rmcp=warn";

/// Build the log filter: `--debug` wins, then `RUST_LOG`, then the default.
pub fn build_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber
pub fn init(debug: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(debug))
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
