//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Pattern file could not be used (unreadable, empty, or malformed)
    PatternFile(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::PatternFile(msg) => write!(f, "Pattern file error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_file_error_display() {
        let error = CliError::PatternFile("no usable patterns".to_string());
        assert_eq!(error.to_string(), "Pattern file error: no usable patterns");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::PatternFile("x".to_string());
        let _: &dyn std::error::Error = &error;
    }
}
