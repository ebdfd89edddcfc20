//! Subscriber installation.
//!
//! Output goes to stdout (or any [`MakeWriter`]), either human-readable or
//! as JSON lines with `timestamp`, `level`, `target`, `fields` and source
//! location.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Outcome of logging initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingHandle {
    /// False when another subscriber was already installed and kept.
    pub installed: bool,
}

/// Install the global subscriber described by `config`.
///
/// Safe to call more than once: if a global subscriber already exists it is
/// kept and the returned handle reports `installed: false`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidLogLevel`] if the filter directive does
/// not parse.
pub fn init_logging(config: &TelemetryConfig) -> Result<LoggingHandle, TelemetryError> {
    match try_init_logging(config) {
        Ok(handle) => Ok(handle),
        Err(TelemetryError::SubscriberInit(reason)) => {
            tracing::debug!(%reason, "Tracing subscriber already installed");
            Ok(LoggingHandle { installed: false })
        }
        Err(err) => Err(err),
    }
}

/// Install the global subscriber, failing if one is already set.
pub fn try_init_logging(config: &TelemetryConfig) -> Result<LoggingHandle, TelemetryError> {
    build_subscriber(config, std::io::stdout)?
        .try_init()
        .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        filter = %config.log_level,
        json = config.json_logs,
        "Logging initialized"
    );

    Ok(LoggingHandle { installed: true })
}

/// Build the subscriber described by `config`, writing to `writer`.
///
/// Not installed globally; pair with [`tracing::subscriber::with_default`]
/// to scope it, e.g. to capture output in tests.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidLogLevel`] if the filter directive does
/// not parse.
pub fn build_subscriber<W>(
    config: &TelemetryConfig,
    writer: W,
) -> Result<impl Subscriber + Send + Sync + 'static, TelemetryError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter = build_filter(&config.log_level)?;

    let (json_layer, fmt_layer) = if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(writer);
        (Some(json_layer), None)
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(writer);
        (None, Some(fmt_layer))
    };

    Ok(tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(fmt_layer))
}

fn build_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|e| TelemetryError::InvalidLogLevel {
        directive: directive.to_string(),
        reason: e.to_string(),
    })
}
