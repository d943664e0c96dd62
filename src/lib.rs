//! `service-config` — configuration resolution for services
//!
//! Locates a configuration payload from one of four sources — an inline
//! flag value, a flag-supplied file path, the `CONFIG` environment
//! variable, or a `CONFIG_PATH` environment variable — in that strict
//! precedence order, and decodes it (JSON or YAML) into a caller-supplied
//! structure.
//!
//! ```
//! use service_config::{ConfigSource, YamlDecoder};
//!
//! #[derive(serde::Deserialize, Default)]
//! struct Settings {
//!     #[serde(rename = "Name")]
//!     name: String,
//! }
//!
//! let mut source = ConfigSource::new();
//! source.set_inline("Name: Enterprise");
//!
//! let bytes = source.resolve()?;
//! let mut settings = Settings::default();
//! YamlDecoder::new(bytes).decode_into(&mut settings)?;
//! assert_eq!(settings.name, "Enterprise");
//! # Ok::<(), service_config::ConfigError>(())
//! ```

pub mod decode;
pub mod error;
pub mod logging;
pub mod source;

pub use decode::{JsonDecoder, YamlDecoder};
pub use error::{ConfigError, ExitCode};
pub use source::{CONFIG_ENV_VAR, CONFIG_PATH_ENV_VAR, ConfigFlags, ConfigSource};
