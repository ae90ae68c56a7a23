//! # Bank Telemetry
//!
//! Structured logging for the spinbank workspace.
//!
//! The library crates only emit `tracing` events; this crate installs the
//! subscriber that renders them. Hot paths (`acquire`/`release`) never log.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bank_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_telemetry(TelemetryConfig::from_env())?;
//!     // ...
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SB_SERVICE_NAME` | `spinbank` | Service name in the startup record |
//! | `SB_COMPONENT_ID` | `00` | Component identifier |
//! | `SB_LOG_LEVEL` / `RUST_LOG` | `info` | `EnvFilter` directive |
//! | `SB_CONSOLE_OUTPUT` | `true` | Write records to stderr |
//! | `SB_JSON_LOGS` | `false` | JSON lines instead of plain text |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// The log level directive could not be parsed.
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber was already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    AlreadyInitialized(String),
}

/// Install the global `tracing` subscriber.
///
/// Returns a guard to hold for the lifetime of the application; dropping it
/// records a shutdown event.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    tracing_setup::init_tracing(&config)?;
    Ok(TelemetryGuard {
        service_name: config.full_service_name(),
    })
}

/// Guard that keeps telemetry active.
#[derive(Debug)]
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry...");
    }
}

/// Span tagged with the component it belongs to.
///
/// ```rust,ignore
/// let _span = component_span!("worker", component = "bench-runtime", thread_id = 3).entered();
/// ```
#[macro_export]
macro_rules! component_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
