//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `vitae-adapters` crate provides implementations.
//!
//! - `TextGenerator`: one system/user prompt pair in, completion text out
//! - `ResumeRenderer`: record in, complete HTML document out
//! - `ResumeStore`: whole-file reads and writes
//!
//! `ReviewPrompter` is the one driving-side port: the review wizard pulls
//! its input from it, so a terminal and a scripted test double look the same.

use std::path::Path;

use serde_json::{Map, Value};

use crate::application::error::{AiError, ApplicationError};
use crate::application::services::review::{FieldOutcome, ReviewChoice};
use crate::domain::{Resume, ReviewField};
use crate::error::VitaeResult;

/// A two-message prompt for a chat completion backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
    /// Overrides the backend's default model when set.
    pub model: Option<String>,
}

impl ChatPrompt {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: Option<&str>) -> Self {
        self.model = model.map(str::to_owned);
        self
    }
}

/// Port for text generation.
///
/// Implemented by:
/// - `vitae_adapters::ai::OpenAiClient` (OpenAI-compatible chat completions)
/// - `MockTextGenerator` (unit tests)
#[cfg_attr(test, mockall::automock)]
pub trait TextGenerator: Send + Sync {
    /// Run one blocking completion. No retries.
    fn generate(&self, prompt: &ChatPrompt) -> Result<String, AiError>;
}

/// Port for rendering a record to a self-contained HTML document.
///
/// Implemented by:
/// - `vitae_adapters::renderer::HtmlRenderer` (minijinja themes)
#[cfg_attr(test, mockall::automock)]
pub trait ResumeRenderer: Send + Sync {
    fn render(&self, resume: &Resume) -> VitaeResult<String>;
}

/// Port for whole-file persistence.
///
/// Implemented by:
/// - `vitae_adapters::store::JsonFileStore` (production)
/// - `vitae_adapters::store::MemoryStore` (testing)
///
/// Writes are not locked; two processes saving the same file race and the
/// last writer wins.
pub trait ResumeStore: Send + Sync {
    fn read_text(&self, path: &Path) -> VitaeResult<String>;

    fn read_bytes(&self, path: &Path) -> VitaeResult<Vec<u8>>;

    fn write_text(&self, path: &Path, content: &str) -> VitaeResult<()>;

    /// Load a resume document. Unknown keys are ignored, missing keys default.
    fn load(&self, path: &Path) -> VitaeResult<Resume> {
        let text = self.read_text(path)?;
        let invalid = |reason: String| ApplicationError::InvalidDocument {
            path: path.to_path_buf(),
            reason,
        };

        let value: Value = serde_json::from_str(&text).map_err(|e| invalid(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(invalid("top-level value is not an object".into()).into());
        };
        Ok(Resume::from_dict(&map))
    }

    /// Persist the whole record as pretty-printed JSON.
    fn save(&self, resume: &Resume, path: &Path) -> VitaeResult<()> {
        self.write_text(path, &resume.to_json())
    }

    /// Persist an arbitrary mapping (extraction output) as pretty-printed JSON.
    fn save_map(&self, map: &Map<String, Value>, path: &Path) -> VitaeResult<()> {
        self.write_text(path, &format!("{:#}", Value::Object(map.clone())))
    }
}

/// Port for the review wizard's input and feedback.
pub trait ReviewPrompter {
    /// Present the field's current value.
    fn show_field(&mut self, field: ReviewField, current: &Value) -> VitaeResult<()>;

    /// Read the user's choice for the field.
    fn choose(&mut self, field: ReviewField) -> VitaeResult<ReviewChoice>;

    /// Read a free-text rewrite instruction.
    fn instruction(&mut self, field: ReviewField) -> VitaeResult<String>;

    /// Tell the user what happened to the field.
    fn report(&mut self, field: ReviewField, outcome: &FieldOutcome) -> VitaeResult<()>;
}
