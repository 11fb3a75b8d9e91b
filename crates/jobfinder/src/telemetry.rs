//! Logging setup for binaries and embedding applications.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to bridge log records: {0}")]
    LogBridge(#[from] log::SetLoggerError),

    #[error("Failed to install tracing subscriber: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Installs the global subscriber and routes `log` records through it.
///
/// `RUST_LOG` wins over `default_filter`. Returns `Ok(false)` if logging was
/// already initialised by an earlier call.
pub fn init_logging(default_filter: &str) -> Result<bool, TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|source| TelemetryError::InvalidFilter {
            filter: default_filter.to_string(),
            source,
        })?;

    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(false);
    }

    tracing_log::LogTracer::init()?;

    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().with_target(true));
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(true)
}
