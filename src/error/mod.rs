use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::{common, ErrorExt};

/// The unified error type for the analyzer library
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] File not found: {message}")]
    NotFound {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Schema error: {message}")]
    Schema {
        code: u16,
        message: String,
        line: Option<u64>,
        column: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Write error: {message}")]
    Write {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalysisError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a not-found error for the given path
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::NotFound {
            code: ErrorCode::INPUT_NOT_FOUND,
            message: path.display().to_string(),
            path: Some(path),
            source: None,
        }
    }

    /// Create a schema error with specific code and location
    pub fn schema_with_code(
        code: u16,
        message: impl Into<String>,
        line: Option<u64>,
        column: Option<String>,
    ) -> Self {
        Self::Schema {
            code,
            message: message.into(),
            line,
            column,
            source: None,
        }
    }

    /// Create a write error with specific code and path
    pub fn write_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Write {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a generic other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::other_with_code(ErrorCode::OTHER_GENERIC, message)
    }

    /// Create an other error with specific code
    pub fn other_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Other {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::NotFound { source: src, .. }
            | Self::Schema { source: src, .. }
            | Self::Write { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::NotFound { message, .. }
            | Self::Schema { message, .. }
            | Self::Write { message, .. }
            | Self::Other { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Attach the output path to a write error
    pub fn with_path(mut self, new_path: impl Into<PathBuf>) -> Self {
        match &mut self {
            Self::Write { path, .. } | Self::NotFound { path, .. } => {
                *path = Some(new_path.into());
            }
            _ => {}
        }
        self
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::NotFound { .. } => 3,
            Self::Schema { .. } => 4,
            Self::Write { .. } => 5,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::NotFound { code, .. }
            | Self::Schema { code, .. }
            | Self::Write { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::NotFound { message, path, .. } => match path {
                Some(p) => format!("Input file not found: {}", p.display()),
                None => format!("Input file not found: {}", message),
            },
            Self::Schema {
                message,
                line,
                column,
                ..
            } => {
                let mut msg = String::from("Input does not match the employee schema");
                if let Some(l) = line {
                    msg.push_str(&format!(" at line {}", l));
                }
                if let Some(c) = column {
                    msg.push_str(&format!(" in column '{}'", c));
                }
                format!("{}: {}", msg, message)
            }
            Self::Write { message, path, .. } => {
                if let Some(p) = path {
                    format!("Could not write {}: {}", p.display(), message)
                } else {
                    format!("Could not write output: {}", message)
                }
            }
            Self::Other { message, .. } => message.clone(),
        }
    }
}

/// Type alias for Results using AnalysisError
pub type Result<T> = std::result::Result<T, AnalysisError>;

// Conversion from common error types

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        match err.kind() {
            ErrorKind::NotFound => AnalysisError::NotFound {
                code: ErrorCode::INPUT_NOT_FOUND,
                message: "File or directory not found".to_string(),
                path: None,
                source: None,
            }
            .with_source(err),
            ErrorKind::PermissionDenied => AnalysisError::write_with_code(
                ErrorCode::WRITE_PERMISSION_DENIED,
                "Permission denied",
                None,
            )
            .with_source(err),
            _ => AnalysisError::other("IO operation failed").with_source(err),
        }
    }
}

impl From<toml::de::Error> for AnalysisError {
    fn from(err: toml::de::Error) -> Self {
        AnalysisError::config_with_code(ErrorCode::CONFIG_INVALID_TOML, "Invalid TOML syntax")
            .with_source(err)
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line());

        if err.is_io_error() {
            return AnalysisError::other_with_code(
                ErrorCode::INPUT_UNREADABLE,
                "Failed to read CSV input",
            )
            .with_source(err);
        }

        let (code, message) = match err.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => (
                ErrorCode::SCHEMA_FIELD_COUNT,
                format!("expected {} fields, found {}", expected_len, len),
            ),
            csv::ErrorKind::Deserialize { err: de, .. } => {
                (ErrorCode::SCHEMA_TYPE_MISMATCH, de.kind().to_string())
            }
            csv::ErrorKind::Utf8 { .. } => (
                ErrorCode::SCHEMA_MALFORMED_CSV,
                "invalid UTF-8 in input".to_string(),
            ),
            _ => (ErrorCode::SCHEMA_GENERIC, err.to_string()),
        };

        AnalysisError::schema_with_code(code, message, line, None).with_source(err)
    }
}
