//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "render a resume" or "review every field".

pub mod assistant;
pub mod prompts;
pub mod resume_service;
pub mod review;

pub use assistant::{AI_ERROR_PREFIX, AiAssistant, Extraction, is_ai_error};
pub use resume_service::{ResumeService, ThemeOverride};
pub use review::{FieldOutcome, ReviewChoice, ReviewReport, ReviewWizard, Stored};
