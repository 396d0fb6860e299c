//! Logging bootstrap for the binary.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Starts the process-wide logger, writing to stderr.
///
/// The level defaults to `warn` and can be overridden through the
/// `RUST_LOG` environment variable. The returned handle must be kept alive
/// for the lifetime of the process; dropping it shuts the logger down.
///
/// # Errors
///
/// Returns a [`FlexiLoggerError`] when a logger is already installed or the
/// level specification cannot be parsed.
pub fn init() -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str("warn")?.start()
}
