// src/log.rs
use tracing_subscriber::{EnvFilter, fmt, prelude::*, util::TryInitError};

/// Install the process-wide subscriber: `time LEVEL message` on stderr.
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `verbose`.
pub fn init(verbose: bool) -> Result<(), TryInitError> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init()
}
