#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Bridges the daemon's repeatable `-v` flag to a `tracing` filter.
//!
//! # Examples
//!
//! ```no_run
//! logging::init(2);
//! tracing::info!("listening");
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global `tracing` subscriber for the process.
///
/// `verbosity` counts repetitions of `-v` on the command line: `0` logs
/// warnings and above, `1` adds info, `2` adds debug, `3` or more adds
/// trace. `RUST_LOG`, when set, overrides this mapping entirely.
pub fn init(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_does_not_panic_when_called_more_than_once() {
        init(0);
        init(3);
    }
}
