//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule errors are `DomainError` from `crate::domain`.
//!
//! [`AiError`] is not part of [`crate::error::VitaeError`]:
//! text generation failures are turned into visible sentinel text by the
//! assistant service and never abort a command.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Template rendering failed (missing nested field, bad template).
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// The file to read does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The file exists but is not a resume document.
    #[error("Invalid resume document {path}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    /// Reading interactive input failed.
    #[error("Failed to read input: {reason}")]
    InputFailed { reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Resume store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { reason } => vec![
                format!("Rendering failed: {}", reason),
                "Every experience entry needs role, company, period and bullets".into(),
                "Every project needs name, period and description".into(),
            ],
            Self::FileNotFound { path } => vec![
                format!("No such file: {}", path.display()),
                "Check the path and try again".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read/write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::InvalidDocument { path, .. } => vec![
                format!("'{}' is not a valid resume JSON document", path.display()),
                "The top level must be a JSON object".into(),
                "Try: vitae extract <text-file> to create one".into(),
            ],
            Self::StoreLockError => vec![
                "The resume store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::InputFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RenderingFailed { .. } | Self::InvalidDocument { .. } => {
                ErrorCategory::Validation
            }
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::InputFailed { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}

/// Failures of a text generation backend.
///
/// The `Display` text is what ends up after the `[AI ERROR]` sentinel prefix.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AiError {
    /// The HTTP client was compiled out.
    #[error("{library} not installed")]
    ClientUnavailable { library: &'static str },

    /// No API credential configured.
    #[error("{variable} credential not set")]
    MissingCredential { variable: &'static str },

    /// Transport-level failure (DNS, TLS, connection reset).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The service answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The response had no completion text.
    #[error("AI returned empty content")]
    EmptyContent,
}
