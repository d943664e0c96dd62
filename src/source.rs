//! Configuration source resolution
//!
//! A [`ConfigSource`] collects up to four candidate sources — an inline
//! flag value, a flag-supplied file path, the `CONFIG` environment
//! variable, and the `CONFIG_PATH` environment variable — and resolves
//! them to raw configuration bytes in a fixed precedence order:
//!
//! 1. inline flag value
//! 2. flag-supplied file path
//! 3. `CONFIG` (inline content)
//! 4. `CONFIG_PATH` (file path)
//!
//! A later source is never consulted once an earlier one is present, even
//! if reading that earlier source fails. Sources never merge; exactly one
//! wins.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::de::DeserializeOwned;

use crate::decode::JsonDecoder;
use crate::error::ConfigError;

/// Environment variable holding inline configuration content.
pub const CONFIG_ENV_VAR: &str = "CONFIG";

/// Environment variable holding a path to a configuration file.
pub const CONFIG_PATH_ENV_VAR: &str = "CONFIG_PATH";

// ============================================================================
// Flag Binding
// ============================================================================

/// Command-line flags for supplying configuration.
///
/// Flatten this into a `clap::Parser` struct and convert the parsed result
/// into a [`ConfigSource`]. The resolver itself never touches argv; it only
/// stores the resulting strings.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigFlags {
    /// JSON or YAML encoded configuration string.
    #[arg(long)]
    pub config: Option<String>,

    /// Path to a configuration file with JSON or YAML encoded content.
    #[arg(long)]
    pub config_path: Option<PathBuf>,
}

impl From<ConfigFlags> for ConfigSource {
    fn from(flags: ConfigFlags) -> Self {
        let mut source = Self::new();
        if let Some(inline) = flags.config {
            source.set_inline(inline);
        }
        if let Some(path) = flags.config_path {
            source.set_path(path.display().to_string());
        }
        source
    }
}

// ============================================================================
// Source Resolution
// ============================================================================

/// Collects candidate configuration sources and resolves them to bytes.
///
/// Both fields default to empty, meaning "unset". They are expected to be
/// populated once during setup (by flag parsing or the setters) and read
/// thereafter; resolution itself never mutates them.
#[derive(Debug, Default, Clone)]
pub struct ConfigSource {
    inline: String,
    path: String,
}

impl ConfigSource {
    /// Creates a source with neither field populated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records inline configuration content (the `--config` flag value).
    pub fn set_inline(&mut self, inline: impl Into<String>) {
        self.inline = inline.into();
    }

    /// Records a configuration file path (the `--config-path` flag value).
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// Returns the raw, non-resolved path field, for diagnostic display.
    #[must_use]
    pub fn path_value(&self) -> &str {
        &self.path
    }

    /// Resolves the configuration bytes from the first populated source.
    ///
    /// Precedence is strict: inline flag, then path flag, then `CONFIG`,
    /// then `CONFIG_PATH`. A populated path source that fails to read is a
    /// hard error; resolution does not fall through to a later source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PathResolution`] or [`ConfigError::FileRead`]
    /// when a path source cannot be absolutized or read, and
    /// [`ConfigError::NoConfigSpecified`] when no source is populated.
    pub fn resolve(&self) -> Result<Vec<u8>, ConfigError> {
        if !self.inline.is_empty() {
            tracing::debug!(source = "flag", "resolved inline configuration");
            return Ok(self.inline.clone().into_bytes());
        }

        if !self.path.is_empty() {
            tracing::debug!(source = "flag", path = %self.path, "resolving configuration file");
            return read_config_file(Path::new(&self.path));
        }

        if let Some(inline) = non_empty_env(CONFIG_ENV_VAR) {
            tracing::debug!(source = "env", "resolved inline configuration");
            return Ok(inline.into_bytes());
        }

        if let Some(path) = non_empty_env(CONFIG_PATH_ENV_VAR) {
            tracing::debug!(source = "env", path = %path, "resolving configuration file");
            return read_config_file(Path::new(&path));
        }

        Err(ConfigError::NoConfigSpecified)
    }

    /// Resolves the configuration and JSON-decodes it into `target`.
    ///
    /// Convenience for the common case; use [`Self::resolve`] with a
    /// [`crate::YamlDecoder`] for YAML content.
    ///
    /// # Errors
    ///
    /// Returns any [`Self::resolve`] error, or [`ConfigError::Json`] when
    /// the resolved bytes do not decode into `target`'s shape.
    pub fn read<T: DeserializeOwned>(&self, target: &mut T) -> Result<(), ConfigError> {
        let bytes = self.resolve()?;
        JsonDecoder::new(bytes).decode_into(target)
    }
}

/// Reads an environment variable, treating unset and empty alike.
fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Absolutizes `path` and reads its contents.
///
/// The two failure modes stay distinct: absolutization failure wraps the
/// OS error, read failure wraps the I/O error. Either aborts resolution.
fn read_config_file(path: &Path) -> Result<Vec<u8>, ConfigError> {
    let absolute = std::path::absolute(path).map_err(|source| ConfigError::PathResolution {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::read(&absolute).map_err(|source| ConfigError::FileRead {
        path: absolute,
        source,
    })
}
