use super::{AnalysisError, ErrorCode};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to a general AnalysisError carrying `code`
    fn to_analysis(self, code: u16, context: impl Into<String>) -> Result<T, AnalysisError>;

    /// Convert to AnalysisError with specific error type
    fn to_config_error(self, message: impl Into<String>) -> Result<T, AnalysisError>;
    fn to_write_error(self, code: u16, path: &Path) -> Result<T, AnalysisError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_analysis(self, code: u16, context: impl Into<String>) -> Result<T, AnalysisError> {
        self.map_err(|e| AnalysisError::other_with_code(code, context).with_source(e))
    }

    fn to_config_error(self, message: impl Into<String>) -> Result<T, AnalysisError> {
        self.map_err(|e| AnalysisError::config(message).with_source(e))
    }

    fn to_write_error(self, code: u16, path: &Path) -> Result<T, AnalysisError> {
        self.map_err(|e| {
            AnalysisError::write_with_code(code, describe(code), Some(path.to_path_buf()))
                .with_source(e)
        })
    }
}

fn describe(code: u16) -> String {
    super::describe_error_code(code).to_string()
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// Create a not found error for an explicitly requested config file
    pub fn config_not_found(path: impl AsRef<Path>) -> AnalysisError {
        AnalysisError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
    }

    /// Create an error for an environment variable that does not parse
    pub fn invalid_env(var: &str, value: &str, expected: &str) -> AnalysisError {
        AnalysisError::config_with_code(
            ErrorCode::CONFIG_INVALID_ENV,
            format!("{}='{}' is not {}", var, value, expected),
        )
    }

    /// Create an error for a header with the wrong column count
    pub fn column_count_mismatch(expected: usize, found: usize) -> AnalysisError {
        AnalysisError::schema_with_code(
            ErrorCode::SCHEMA_COLUMN_COUNT,
            format!("expected {} columns, found {}", expected, found),
            Some(1),
            None,
        )
    }
}
