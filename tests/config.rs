use std::io::Write;

use rustynet_message::{ConfigError, Message, MessageConfig, ProtocolVersion};
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn message_from_config_file() {
    let file = config_file(
        r#"
protocol_version = "1.0"

[default_headers]
Server = "rustynet/0.1"
Accept = ["text/html", "application/json"]
accept = "text/plain"
"#,
    );

    let config = MessageConfig::try_from_file(file.path()).unwrap();
    let message = Message::from_config(&config);

    assert_eq!(message.protocol_version(), ProtocolVersion::V1_0);
    assert_eq!(message.header_line("server"), "rustynet/0.1");
    assert_eq!(
        message.header("ACCEPT"),
        ["text/html", "application/json", "text/plain"]
    );
    assert_eq!(message.headers().names().collect::<Vec<_>>(), ["Server", "Accept"]);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MessageConfig::try_from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn from_file_falls_back_to_default() {
    let file = config_file("protocol_version = 2");
    assert_eq!(MessageConfig::from_file(file.path()), MessageConfig::default());

    let message = Message::from_config(&MessageConfig::from_file("/nonexistent/message.toml"));
    assert_eq!(message, Message::new());
}

#[test]
fn programmatic_defaults() {
    let config = MessageConfig::default()
        .with_default_header("Connection", "close")
        .with_default_header("Accept", ["*/*"]);
    let message = Message::from_config(&config).with_header("connection", "keep-alive");

    assert_eq!(message.header("Connection"), ["keep-alive"]);
    assert_eq!(message.header_line("accept"), "*/*");
}

#[test]
fn default_header_names_resolve_ignoring_case() {
    let config = MessageConfig::default()
        .with_default_header("Accept", "text/html")
        .with_default_header("ACCEPT", "application/json")
        .with_default_header("Server", "rustynet/0.1");
    let message = Message::from_config(&config);

    assert_eq!(message.header("accept"), ["application/json"]);
    assert_eq!(message.headers().names().collect::<Vec<_>>(), ["Accept", "Server"]);
}
