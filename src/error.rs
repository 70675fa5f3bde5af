use thiserror::Error;

/// Failures of [`Message`](crate::http::message::Message) operations.
///
/// Both kinds signal a caller error and are returned before any new message
/// is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// An argument has the wrong shape (e.g. a header value that is neither a
    /// string nor an array of strings).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An argument has the right shape but is outside the accepted domain.
    #[error("unexpected value: {0}")]
    UnexpectedValue(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to deserialize config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Message(#[from] MessageError),
}
