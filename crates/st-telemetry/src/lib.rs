//! # st-telemetry
//!
//! Log setup shared by the server-time binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use st_telemetry::{init_logging, TelemetryConfig};
//!
//! init_logging(&TelemetryConfig::from_env())?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ST_SERVICE_NAME` | `server-time` | Service name in the startup line |
//! | `ST_LOG_LEVEL` / `RUST_LOG` | `info` | `EnvFilter` directive |
//! | `ST_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `ST_JSON_LOGS` | `false` | JSON instead of human-readable lines |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}
