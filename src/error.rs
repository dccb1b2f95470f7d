use thiserror::Error;

/// Engine errors.
///
/// Malformed fields inside records never reach this type; they degrade to
/// conservative defaults during deserialization. Only a fundamentally wrong
/// payload shape or a broken configuration is fatal.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The caller passed something other than a list where a list was
    /// promised. Iterating over an object's fields would corrupt results
    /// unpredictably, so this fails fast instead.
    #[error("invalid input shape: expected {expected}, got {found}")]
    InvalidInputShape {
        expected: &'static str,
        found: &'static str,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Human-readable kind of a JSON value, for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_shape_message() {
        let err = EngineError::InvalidInputShape {
            expected: "an array of job postings",
            found: "an object",
        };
        assert_eq!(
            err.to_string(),
            "invalid input shape: expected an array of job postings, got an object"
        );
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&serde_json::json!({})), "an object");
        assert_eq!(json_kind(&serde_json::json!([])), "an array");
        assert_eq!(json_kind(&serde_json::json!(null)), "null");
    }
}
