//! Application layer for vitae.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ResumeService, AiAssistant, ReviewWizard)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All record rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AiAssistant, Extraction, FieldOutcome, ResumeService, ReviewChoice, ReviewReport,
    ReviewWizard, ThemeOverride, is_ai_error,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ChatPrompt, ResumeRenderer, ResumeStore, ReviewPrompter, TextGenerator};

pub use error::{AiError, ApplicationError};
