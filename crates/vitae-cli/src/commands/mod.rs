//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into service calls and print the results.
//! No resume logic lives here.

pub mod completions;
pub mod config;
pub mod extract;
pub mod init;
pub mod render;
pub mod review;
pub mod set_photo;
pub mod summary;
pub mod themes;

use vitae_adapters::{HtmlRenderer, JsonFileStore, OpenAiClient};
use vitae_core::application::{AiAssistant, ResumeService};

use crate::config::AppConfig;

/// Resume service over the local filesystem and the HTML themes.
fn resume_service() -> ResumeService {
    ResumeService::new(Box::new(JsonFileStore::new()), Box::new(HtmlRenderer::new()))
}

/// Assistant over the configured OpenAI-compatible endpoint.
fn assistant(config: &AppConfig, model: Option<&str>) -> AiAssistant {
    AiAssistant::new(Box::new(OpenAiClient::new(config.ai_settings(model))))
}
