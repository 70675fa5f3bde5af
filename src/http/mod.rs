use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MessageError;

pub mod body;
pub mod headers;
pub mod message;
pub mod validator;

/// HTTP versions a [`Message`](message::Message) can carry.
///
/// Only the 1.x text protocols are modelled. The string forms are the ones
/// found after `HTTP/` on a request or status line.
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash, Default, Deserialize, Serialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum ProtocolVersion {
    V1_0,
    #[default]
    V1_1,
}

pub const DEFAULT_PROTOCOL_VERSION: ProtocolVersion = ProtocolVersion::V1_1;

pub const SUPPORTED_PROTOCOL_VERSIONS: [ProtocolVersion; 2] =
    [ProtocolVersion::V1_0, ProtocolVersion::V1_1];

impl ProtocolVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolVersion::V1_0 => "1.0",
            ProtocolVersion::V1_1 => "1.1",
        }
    }
}

impl FromStr for ProtocolVersion {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUPPORTED_PROTOCOL_VERSIONS
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| {
                MessageError::UnexpectedValue(format!(
                    "the protocol version {s:?} is not a valid value"
                ))
            })
    }
}

impl TryFrom<String> for ProtocolVersion {
    type Error = MessageError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ProtocolVersion> for String {
    fn from(v: ProtocolVersion) -> Self {
        v.as_str().to_string()
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_versions() {
        assert_eq!("1.0".parse::<ProtocolVersion>(), Ok(ProtocolVersion::V1_0));
        assert_eq!("1.1".parse::<ProtocolVersion>(), Ok(ProtocolVersion::V1_1));
    }

    #[test]
    fn rejects_unsupported_versions() {
        for v in ["2.0", "0.9", "1", "1.1 ", "HTTP/1.1", ""] {
            assert!(matches!(
                v.parse::<ProtocolVersion>(),
                Err(MessageError::UnexpectedValue(_))
            ));
        }
    }

    #[test]
    fn default_is_1_1() {
        assert_eq!(ProtocolVersion::default(), DEFAULT_PROTOCOL_VERSION);
        assert_eq!(DEFAULT_PROTOCOL_VERSION.to_string(), "1.1");
    }
}
