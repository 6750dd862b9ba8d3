use thiserror::Error;

/// Raised when input text cannot be decoded into a document tree.
///
/// This is the only failure a caller can observe from well-formed requests:
/// field access after a successful parse always resolves to a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FormatError {
    message: String,
}

impl FormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The parser's message already names the failing line and column.
impl From<serde_yaml::Error> for FormatError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::new(err.to_string())
    }
}
