//! # Hierarchical Chain Telemetry
//!
//! Structured logging for the fork-choice node.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hc_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config).expect("Failed to init logging");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HC_SERVICE_NAME` | `hierarchical-chain` | Service name on log events |
//! | `HC_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `HC_JSON_LOGS` | `false` | JSON output (defaults on inside containers) |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{init_logging, init_test_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Global subscriber already installed: {0}")]
    AlreadyInitialized(String),
}
