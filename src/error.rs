use serde_json::error::Category;
use thiserror::Error;

/// Failure to locate a JSON object inside raw model output
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The text has no `{` ... `}` span
    #[error("No JSON object found in the input text")]
    NoJsonFound,
}

/// Classified failure of the strict, schema-validated decode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A required key is absent from the object
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// A key is present but bound to null (or an empty required value)
    #[error("Value not found: {0}")]
    ValueNotFound(String),

    /// A value is present but has the wrong type
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// The candidate text is not valid JSON
    #[error("Data corrupted: {0}")]
    DataCorrupted(String),

    /// Any other decode failure
    #[error("Unknown decoding error: {0}")]
    Unknown(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof => DecodeError::DataCorrupted(err.to_string()),
            Category::Io => DecodeError::Unknown(err.to_string()),
            Category::Data => classify_data_error(&err.to_string()),
        }
    }
}

/// Sorts serde's data errors by the message serde's `de::Error` helpers produce.
fn classify_data_error(message: &str) -> DecodeError {
    if let Some(rest) = message.strip_prefix("missing field `") {
        let field = rest.split('`').next().unwrap_or_default();
        return DecodeError::KeyNotFound(field.to_string());
    }

    if let Some(rest) = message.strip_prefix("invalid type: ") {
        let expected = rest
            .split_once(", expected ")
            .map(|(_, expected)| strip_position(expected))
            .unwrap_or_default();
        // serde_json reports JSON null as either "null" or serde's "unit value"
        return if rest.starts_with("null") || rest.starts_with("unit value") {
            DecodeError::ValueNotFound(expected.to_string())
        } else {
            DecodeError::TypeMismatch(expected.to_string())
        };
    }

    DecodeError::Unknown(message.to_string())
}

// serde_json appends " at line L column C" when decoding from text
fn strip_position(expected: &str) -> &str {
    expected
        .rsplit_once(" at line ")
        .map(|(head, _)| head)
        .unwrap_or(expected)
}

/// Errors surfaced by the parsing pipeline and the command-line front end
#[derive(Error, Debug)]
pub enum ParseError {
    /// No JSON object could be located in the input
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Neither the strict decoder nor the lenient recoverer produced a recipe
    #[error("No recipe could be recovered{}", .strict.as_ref().map(|e| format!(" (strict decode failed: {e})")).unwrap_or_default())]
    NoResult { strict: Option<DecodeError> },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to read input or write output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a recipe
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
