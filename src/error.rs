/// Error types for search-explainer
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for search-explainer operations
#[derive(Error, Debug)]
pub enum ExplainerError {
    /// I/O errors (file operations, console reads and writes)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Bad built-in regex
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// User typed something we could not use
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A result record that should not be written
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for search-explainer operations
pub type Result<T> = std::result::Result<T, ExplainerError>;

/// Convert ExplainerError to a user-friendly error message
impl ExplainerError {
    pub fn user_message(&self) -> String {
        match self {
            ExplainerError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            ExplainerError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            ExplainerError::Pattern(e) => {
                format!("Internal pattern failed to compile: {}", e)
            }
            ExplainerError::InvalidInput(reason) => {
                format!("Invalid input: {}", reason)
            }
            ExplainerError::InvalidRecord(reason) => {
                format!("Result not saved: {}", reason)
            }
            ExplainerError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = ExplainerError::InvalidInput("abc".to_string());
        assert!(err.user_message().contains("abc"));

        let err = ExplainerError::InvalidRecord("empty question label".to_string());
        assert!(err.user_message().contains("not saved"));
    }

    #[test]
    fn test_error_display() {
        let err = ExplainerError::Config("missing value for --results".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Configuration error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: ExplainerError = io.into();
        assert!(matches!(err, ExplainerError::Io(_)));
        assert!(err.user_message().contains("permissions"));
    }
}
