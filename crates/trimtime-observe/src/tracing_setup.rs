//! Tracing subscriber initialization with structured logging.
//!
//! Log lines go to stderr so they never interleave with the interactive menu
//! on stdout.
//!
//! # Usage
//!
//! ```no_run
//! use trimtime_observe::tracing_setup::{init_tracing, Verbosity};
//!
//! init_tracing(Verbosity::from_flags(1, false)).unwrap();
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// How much the binary should log, derived from the command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only (`--quiet`).
    Quiet,
    /// Warnings and errors.
    Normal,
    /// State changes (`-v`).
    Verbose,
    /// Everything (`-vv`).
    Trace,
}

impl Verbosity {
    /// Map the `-v` count and `--quiet` flag to a level. Any `-v` wins over
    /// `--quiet`.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match verbose {
            0 if quiet => Verbosity::Quiet,
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }

    /// Filter directive for this level.
    pub fn directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info,trimtime=debug,trimtime_core=debug",
            Verbosity::Trace => "trace",
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Installs a `fmt` layer on stderr without targets. The filter comes from
/// `verbosity` only; `RUST_LOG` is not consulted.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set.
pub fn init_tracing(verbosity: Verbosity) -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::new(verbosity.directive()))
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
