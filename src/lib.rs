//! Immutable HTTP message values.
//!
//! [`Message`] holds a protocol version, an ordered set of case-insensitive,
//! multi-valued headers and an opaque [`Body`]. It is never modified in place:
//! each `with_*` method returns a new message.
//!
//! ```
//! use rustynet_message::Message;
//!
//! let message = Message::new()
//!     .with_header("Content-Type", "text/html")
//!     .with_added_header("CONTENT-TYPE", "charset=utf-8");
//!
//! assert_eq!(message.header_line("content-type"), "text/html,charset=utf-8");
//! assert!(!message.without_header("content-type").has_header("Content-Type"));
//! ```

pub mod config;
pub mod error;
pub mod http;

pub use config::MessageConfig;
pub use error::{ConfigError, MessageError};
pub use http::body::Body;
pub use http::headers::{HeaderValues, HttpHeaders};
pub use http::message::Message;
pub use http::{DEFAULT_PROTOCOL_VERSION, ProtocolVersion, SUPPORTED_PROTOCOL_VERSIONS};
