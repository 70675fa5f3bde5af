use toml::Value;

use crate::error::MessageError;
use crate::http::headers::HeaderValues;

/// Checks header input that arrives untyped, such as header tables in a
/// [`MessageConfig`](crate::config::MessageConfig) file.
pub struct Validator;

impl Validator {
    pub fn is_string_or_array_of_strings(value: &Value) -> bool {
        match value {
            Value::String(_) => true,
            Value::Array(values) => values.iter().all(Value::is_str),
            _ => false,
        }
    }

    /// Converts `value` into [`HeaderValues`], wrapping a bare string in a
    /// single-element sequence.
    pub fn header_values(name: &str, value: &Value) -> Result<HeaderValues, MessageError> {
        match value {
            Value::String(s) => Ok(s.as_str().into()),
            Value::Array(values) if Self::is_string_or_array_of_strings(value) => Ok(values
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .into()),
            _ => Err(MessageError::InvalidArgument(format!(
                "value of header {name:?} must have type string or string[], got {}",
                value.type_str()
            ))),
        }
    }
}
