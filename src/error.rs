//! Error types for `service-config`
//!
//! Every failure mode of source resolution and decoding gets its own
//! variant so callers can match on the cause. Errors are returned to the
//! caller, never logged or retried inside the library.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for the `service-config` binary.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (no source supplied, decode failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Source resolution and decoding errors.
///
/// The "Unmarshaling config" prefix on the decode variants is part of the
/// public contract: embedding applications match on that substring.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// None of the four configuration sources was populated
    #[error(
        "no configuration specified: supply one of --config, --config-path, \
         CONFIG, or CONFIG_PATH"
    )]
    NoConfigSpecified,

    /// A configuration file path could not be made absolute
    #[error("making config file path absolute: {source}")]
    PathResolution {
        /// The path that failed to absolutize
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be read
    #[error("reading config file {}: {source}", path.display())]
    FileRead {
        /// Path to the unreadable file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON deserialization failed
    #[error("Unmarshaling config: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization failed
    #[error("Unmarshaling config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConfigError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NoConfigSpecified | Self::Json(_) | Self::Yaml(_) => ExitCode::CONFIG_ERROR,
            Self::PathResolution { .. } | Self::FileRead { .. } => ExitCode::IO_ERROR,
        }
    }
}
