//! Console logger factory
//!
//! Builds a console-only `tracing` subscriber. No file or network layers.
//! Construction is pure; installing it as the global default is a separate,
//! explicit step.

use tracing::Level;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Options for the console logger
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Minimum severity emitted (overridable via `RUST_LOG`)
    pub level: Level,
    /// Include the event's module path
    pub with_target: bool,
    /// Single-line compact formatting
    pub compact: bool,
    /// ANSI color codes
    pub ansi: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_target: true,
            compact: false,
            ansi: true,
        }
    }
}

/// Build a console-only subscriber. Does not install anything.
///
/// Boxed because the compact and full formatters are distinct types.
pub fn console_logger(options: &LogOptions) -> Box<dyn tracing::Subscriber + Send + Sync> {
    let filter = EnvFilter::from_default_env().add_directive(options.level.into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(options.with_target)
        .with_ansi(options.ansi);

    if options.compact {
        Box::new(builder.compact().finish())
    } else {
        Box::new(builder.finish())
    }
}

/// Install a console logger as the process-wide default.
///
/// Idempotent: a second call (or a subscriber installed elsewhere) is left
/// in place rather than treated as an error.
pub fn init_logging(options: &LogOptions) {
    let _ = console_logger(options).try_init();
}
