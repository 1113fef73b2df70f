//! Error types for package records

use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PackageError>;

/// A value did not match the shape or domain its consumer expected.
///
/// Carries only a message. Raised while decoding persisted lock data and
/// available to any collaborator that validates data around a
/// [`PackageRecord`](crate::PackageRecord).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UnexpectedValue {
    message: String,
}

impl UnexpectedValue {
    /// Name of this error kind
    pub const KIND: &'static str = "UnexpectedValue";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Create an error for a lock key holding the wrong JSON shape
    pub fn shape(key: &str, expected: &str, found: &Value) -> Self {
        Self::new(format!(
            "expected {} for '{}', found {}",
            expected,
            key,
            json_kind(found)
        ))
    }

    pub fn kind(&self) -> &'static str {
        Self::KIND
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Package record errors
#[derive(Debug, Error)]
pub enum PackageError {
    #[error(transparent)]
    UnexpectedValue(#[from] UnexpectedValue),

    #[error("Invalid lock JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse record config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize record config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl PackageError {
    /// Stable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            PackageError::UnexpectedValue(e) => e.kind(),
            PackageError::Json(_) => "Json",
            PackageError::ConfigParse(_) => "ConfigParse",
            PackageError::ConfigSerialize(_) => "ConfigSerialize",
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unexpected_value_message() {
        let err = UnexpectedValue::new("bad lock entry");
        assert_eq!(err.to_string(), "bad lock entry");
        assert_eq!(err.message(), "bad lock entry");
        assert_eq!(err.kind(), "UnexpectedValue");
    }

    #[test]
    fn test_shape_message() {
        let err = UnexpectedValue::shape("is-dev", "a boolean", &json!("yes"));
        assert_eq!(err.to_string(), "expected a boolean for 'is-dev', found string");
    }

    #[test]
    fn test_package_error_is_transparent() {
        let err: PackageError = UnexpectedValue::new("nope").into();
        assert_eq!(err.to_string(), "nope");
        assert_eq!(err.kind(), UnexpectedValue::KIND);
    }

    #[test]
    fn test_json_error_kind() {
        let err: PackageError = serde_json::from_str::<Value>("{").unwrap_err().into();
        assert_eq!(err.kind(), "Json");
        assert!(err.to_string().starts_with("Invalid lock JSON"));
    }
}
