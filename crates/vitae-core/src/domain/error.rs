// ============================================================================
// domain/error.rs - RESUME DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the root `VitaeError` is `Clone`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("{field} must be a list, found {found}")]
    Shape { field: &'static str, found: String },

    #[error("Unknown theme: {theme}")]
    UnknownTheme { theme: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Shape { field, .. } => vec![
                format!("'{field}' must be a JSON array in the resume file"),
                "A review edit may have stored plain text; run 'vitae review' again or fix the file by hand".into(),
            ],
            Self::UnknownTheme { theme } => vec![
                format!("'{theme}' is not a known theme"),
                format!(
                    "Available themes: {}",
                    crate::domain::Theme::NAMES.join(", ")
                ),
                "Try: vitae themes".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Shape { .. } | Self::UnknownTheme { .. } => ErrorCategory::Validation,
        }
    }
}
