//! # DHT Telemetry
//!
//! Structured logging bootstrap for processes embedding the DHT routing
//! components. The library crates only emit `tracing` events; this crate
//! installs the subscriber that renders them.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dht_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config).expect("invalid log filter");
//!
//! tracing::info!(service = %config.service_name, "Routing table ready");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DHT_SERVICE_NAME` | `dht` | Service name attached to the startup event |
//! | `DHT_LOG_LEVEL` | `info` | Log filter directive (falls back to `RUST_LOG`) |
//! | `DHT_LOG_JSON` | `false` | Emit JSON lines instead of human-readable output |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_subscriber, init_logging, try_init_logging, LoggingHandle};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidLogLevel { directive: String, reason: String },

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}
