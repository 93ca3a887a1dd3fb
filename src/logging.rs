//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so stdout carries only session output.
//! `RUST_LOG` takes precedence over the `-v` count when it is set.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Maps the `-v` count to a filter directive for this crate.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "smart_notes=warn",
        1 => "smart_notes=info",
        2 => "smart_notes=debug",
        _ => "smart_notes=trace",
    }
}

/// Installs the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
