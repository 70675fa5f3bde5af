//! Immutable HTTP message value.
//!
//! A [`Message`] is never changed in place: every `with_*` method borrows the
//! receiver, copies it, applies one change to the copy and returns the copy.
//! Arguments are checked before anything is copied.

use crate::config::MessageConfig;
use crate::error::MessageError;
use crate::http::ProtocolVersion;
use crate::http::body::Body;
use crate::http::headers::{HeaderValues, HttpHeaders};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    protocol_version: ProtocolVersion,
    headers: HttpHeaders,
    body: Body,
}

impl Message {
    pub fn new() -> Self {
        Self {
            protocol_version: ProtocolVersion::default(),
            headers: HttpHeaders::new(),
            body: Body::empty(),
        }
    }

    /// Builds a message with the configured protocol version and default
    /// headers.
    pub fn from_config(config: &MessageConfig) -> Self {
        let mut message = Self::new().with_protocol(config.protocol_version);
        for (name, values) in config.default_headers() {
            message = message.with_added_header(name, values.as_slice());
        }
        message
    }

    pub fn protocol_version(&self) -> ProtocolVersion {
        self.protocol_version
    }

    /// Returns a copy using `version`, which must be one of
    /// [`SUPPORTED_PROTOCOL_VERSIONS`](crate::http::SUPPORTED_PROTOCOL_VERSIONS).
    pub fn with_protocol_version(&self, version: &str) -> Result<Self, MessageError> {
        let version = version.parse()?;
        Ok(self.with_protocol(version))
    }

    pub fn with_protocol(&self, version: ProtocolVersion) -> Self {
        let mut message = self.clone();
        message.protocol_version = version;
        message
    }

    pub fn headers(&self) -> &HttpHeaders {
        &self.headers
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains(name)
    }

    pub fn header(&self, name: &str) -> &[String] {
        self.headers.get(name)
    }

    pub fn header_line(&self, name: &str) -> String {
        self.headers.line(name)
    }

    /// Returns a copy where the header matching `name` holds exactly `value`.
    ///
    /// A name that matches no stored header is inserted with its given casing.
    pub fn with_header(&self, name: &str, value: impl Into<HeaderValues>) -> Self {
        let value = value.into();
        let mut message = self.clone();
        message.headers.set(name, value);
        message
    }

    /// Returns a copy where `value` follows the existing values of the header
    /// matching `name`.
    pub fn with_added_header(&self, name: &str, value: impl Into<HeaderValues>) -> Self {
        let value = value.into();
        let mut message = self.clone();
        message.headers.append(name, value);
        message
    }

    pub fn without_header(&self, name: &str) -> Self {
        let mut message = self.clone();
        message.headers.remove(name);
        message
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn with_body(&self, body: impl Into<Body>) -> Self {
        let body = body.into();
        let mut message = self.clone();
        message.body = body;
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_message_defaults() {
        let message = Message::new();
        assert_eq!(message.protocol_version().as_str(), "1.1");
        assert!(message.headers().is_empty());
        assert!(message.body().is_empty());
        assert_eq!(message, Message::default());
    }

    #[test]
    fn with_protocol_version_copies() {
        let message = Message::new().with_header("Host", "example.com");
        let older = message.with_protocol_version("1.0").unwrap();
        assert_eq!(older.protocol_version(), ProtocolVersion::V1_0);
        assert_eq!(older.header("host"), ["example.com"]);
        assert_eq!(message.protocol_version(), ProtocolVersion::V1_1);
    }

    #[test]
    fn with_protocol_version_rejects_unknown() {
        let err = Message::new().with_protocol_version("2.0").unwrap_err();
        assert!(matches!(err, MessageError::UnexpectedValue(_)));
    }

    #[test]
    fn with_body_keeps_headers() {
        let message = Message::new().with_header("Content-Type", "text/plain");
        let with_body = message.with_body("hello");
        assert_eq!(with_body.body().contents().as_ref(), b"hello");
        assert_eq!(with_body.headers(), message.headers());
        assert!(message.body().is_empty());
    }
}
