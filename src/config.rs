use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{ConfigError, MessageError};
use crate::http::ProtocolVersion;
use crate::http::headers::{HeaderValues, HttpHeaders};
use crate::http::validator::Validator;

/// Defaults applied by [`Message::from_config`](crate::http::message::Message::from_config).
///
/// ```toml
/// protocol_version = "1.0"
///
/// [default_headers]
/// Server = "rustynet/0.1"
/// Accept = ["text/html", "application/json"]
/// ```
///
/// Header names are matched ignoring ASCII case. Keys in a file that differ
/// only in case merge under the first key's casing, values in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageConfig {
    pub protocol_version: ProtocolVersion,
    default_headers: HttpHeaders,
}

// File layout before header values are checked.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMessageConfig {
    #[serde(default)]
    protocol_version: ProtocolVersion,

    #[serde(default)]
    default_headers: IndexMap<String, toml::Value>,
}

impl TryFrom<RawMessageConfig> for MessageConfig {
    type Error = MessageError;

    fn try_from(raw: RawMessageConfig) -> Result<Self, Self::Error> {
        let mut default_headers = HttpHeaders::new();
        for (name, value) in &raw.default_headers {
            default_headers.append(name, Validator::header_values(name, value)?);
        }

        Ok(Self {
            protocol_version: raw.protocol_version,
            default_headers,
        })
    }
}

impl FromStr for MessageConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = toml::from_str::<RawMessageConfig>(s)?;
        Ok(MessageConfig::try_from(raw)?)
    }
}

impl MessageConfig {
    pub fn try_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = content.parse::<MessageConfig>()?;
        debug!(path = %path.display(), headers = config.default_headers.len(), "loaded message config");
        Ok(config)
    }

    /// Like [`try_from_file`](Self::try_from_file) but falls back to the
    /// default config when the file can't be read or is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "falling back to default message config");
                MessageConfig::default()
            }
        }
    }

    /// Sets the default values of the header matching `name`, replacing any
    /// earlier values whatever their casing.
    pub fn with_default_header(mut self, name: &str, value: impl Into<HeaderValues>) -> Self {
        self.default_headers.set(name, value.into());
        self
    }

    pub fn default_headers(&self) -> &HttpHeaders {
        &self.default_headers
    }
}
