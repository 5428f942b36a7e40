// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for configuration loading and validation.
//!
//! All errors implement `std::error::Error` via the `thiserror` crate for
//! consistent error handling.

use thiserror::Error;

/// Errors raised while loading or validating a runtime configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File I/O error while reading the configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error.
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Host frame rate incompatible with the fixed simulation rate.
    #[error(
        "Invalid host rate {host_rate_hz} Hz: must be nonzero and divide the {simulation_rate_hz} Hz simulation rate"
    )]
    InvalidHostRate {
        host_rate_hz: u32,
        simulation_rate_hz: u32,
    },
}
