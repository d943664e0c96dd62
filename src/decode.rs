//! Configuration decoding
//!
//! Two independent decoders over the same contract: each holds an
//! immutable byte sequence captured at construction and deserializes it
//! into a caller-owned target on demand. Decoding is repeatable and
//! side-effect-free with respect to decoder state.
//!
//! Per serde semantics, fields in the payload with no counterpart in the
//! target are ignored, and target fields absent from the payload take
//! their declared serde defaults.

use serde::de::DeserializeOwned;

use crate::error::ConfigError;

/// Decodes JSON configuration bytes into caller-supplied structures.
#[derive(Debug, Clone)]
pub struct JsonDecoder {
    bytes: Vec<u8>,
}

impl JsonDecoder {
    /// Captures the bytes to decode.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Deserializes the held bytes into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when the bytes are not well-formed
    /// JSON for `target`'s shape (syntax error or type mismatch).
    pub fn decode_into<T: DeserializeOwned>(&self, target: &mut T) -> Result<(), ConfigError> {
        *target = serde_json::from_slice(&self.bytes)?;
        Ok(())
    }
}

/// Decodes YAML configuration bytes into caller-supplied structures.
#[derive(Debug, Clone)]
pub struct YamlDecoder {
    bytes: Vec<u8>,
}

impl YamlDecoder {
    /// Captures the bytes to decode.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Deserializes the held bytes into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] when the bytes are not well-formed
    /// YAML for `target`'s shape (syntax error or type mismatch).
    pub fn decode_into<T: DeserializeOwned>(&self, target: &mut T) -> Result<(), ConfigError> {
        *target = serde_yaml::from_slice(&self.bytes)?;
        Ok(())
    }
}
