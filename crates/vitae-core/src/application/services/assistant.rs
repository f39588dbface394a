//! AI assistant service - prompt building on top of a [`TextGenerator`].
//!
//! Every operation returns text, never an error: backend failures come back
//! as `"[AI ERROR] <cause>"` so commands can show them and carry on.

use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use crate::application::ports::{ChatPrompt, TextGenerator};
use crate::application::services::prompts;
use crate::domain::{AiOutput, Resume, ReviewField};

/// Prefix of every failed call's text.
pub const AI_ERROR_PREFIX: &str = "[AI ERROR]";

/// Whether `text` is a failed call's sentinel rather than model output.
pub fn is_ai_error(text: &str) -> bool {
    text.starts_with(AI_ERROR_PREFIX)
}

/// Result of [`AiAssistant::extract_resume`].
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// The reply parsed to a JSON object.
    Parsed(Map<String, Value>),
    /// The reply was not a JSON object; `raw` is the untouched reply.
    Failed { error: String, raw: String },
}

impl Extraction {
    /// The same mapping shape the persisted file uses for failures:
    /// `{"error": ..., "raw": ...}`.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Parsed(map) => Value::Object(map.clone()),
            Self::Failed { error, raw } => serde_json::json!({ "error": error, "raw": raw }),
        }
    }
}

/// High-level AI operations over an injected text generator.
pub struct AiAssistant {
    generator: Box<dyn TextGenerator>,
    model: Option<String>,
}

impl AiAssistant {
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self {
            generator,
            model: None,
        }
    }

    /// Use `model` instead of the generator's default for every call.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    /// One completion round trip. Failures become sentinel text.
    #[instrument(skip_all, fields(model = model.unwrap_or("default")))]
    pub fn call(&self, system: &str, user: &str, model: Option<&str>) -> String {
        let prompt = ChatPrompt::new(system, user).with_model(model);
        match self.generator.generate(&prompt) {
            Ok(text) => {
                debug!(chars = text.len(), "AI call succeeded");
                text
            }
            Err(e) => {
                warn!(error = %e, "AI call failed");
                format!("{AI_ERROR_PREFIX} {e}")
            }
        }
    }

    fn ask(&self, system: &str, user: &str) -> String {
        self.call(system, user, self.model.as_deref())
    }

    /// Turn raw resume text into the record's JSON mapping.
    #[instrument(skip_all, fields(chars = raw_text.len()))]
    pub fn extract_resume(&self, raw_text: &str) -> Extraction {
        let raw = self.ask(prompts::EXTRACT_SYSTEM, &prompts::extract_user(raw_text));
        match AiOutput::from_text(&raw) {
            AiOutput::Parsed(Value::Object(map)) => Extraction::Parsed(map),
            _ => Extraction::Failed {
                error: prompts::EXTRACT_PARSE_FAILED.to_string(),
                raw,
            },
        }
    }

    /// Single-shot rewrite of `text` following `instruction`.
    pub fn rewrite_text(&self, text: &str, instruction: &str) -> String {
        self.ask(
            prompts::REWRITE_SYSTEM,
            &prompts::rewrite_user(text, instruction),
        )
    }

    /// Regenerate one field with the whole record as context.
    pub fn regenerate_field(&self, field: ReviewField, resume: &Resume) -> String {
        self.ask(
            prompts::REGENERATE_SYSTEM,
            &prompts::regenerate_user(field.key(), &resume.to_json()),
        )
    }

    /// Fresh top-level summary with the whole record as context.
    pub fn generate_summary(&self, resume: &Resume) -> String {
        self.ask(
            prompts::SUMMARY_SYSTEM,
            &prompts::summary_user(&resume.to_json()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::AiError;
    use crate::application::ports::MockTextGenerator;
    use mockall::predicate::*;

    fn assistant_returning(reply: Result<&'static str, AiError>) -> AiAssistant {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .returning(move |_| reply.clone().map(str::to_owned));
        AiAssistant::new(Box::new(generator))
    }

    #[test]
    fn call_returns_completion_text() {
        let assistant = assistant_returning(Ok("hello"));
        assert_eq!(assistant.call("sys", "user", None), "hello");
    }

    #[test]
    fn missing_credential_becomes_sentinel() {
        let assistant = assistant_returning(Err(AiError::MissingCredential {
            variable: "OPENAI_API_KEY",
        }));
        let text = assistant.call("sys", "user", None);
        assert!(is_ai_error(&text));
        assert!(text.contains("credential"));
        assert_eq!(text, "[AI ERROR] OPENAI_API_KEY credential not set");
    }

    #[test]
    fn missing_client_becomes_sentinel() {
        let assistant = assistant_returning(Err(AiError::ClientUnavailable {
            library: "reqwest",
        }));
        assert_eq!(
            assistant.call("s", "u", None),
            "[AI ERROR] reqwest not installed"
        );
    }

    #[test]
    fn call_forwards_prompt_and_model() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .with(eq(ChatPrompt {
                system: "sys".into(),
                user: "usr".into(),
                model: Some("gpt-4o".into()),
            }))
            .times(1)
            .returning(|_| Ok("ok".into()));

        let assistant = AiAssistant::new(Box::new(generator));
        assert_eq!(assistant.call("sys", "usr", Some("gpt-4o")), "ok");
    }

    #[test]
    fn assistant_model_applies_to_operations() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .withf(|p| p.model.as_deref() == Some("gpt-4o-mini"))
            .returning(|_| Ok("Summary".into()));

        let assistant =
            AiAssistant::new(Box::new(generator)).with_model(Some("gpt-4o-mini".into()));
        assert_eq!(assistant.generate_summary(&Resume::new()), "Summary");
    }

    #[test]
    fn extract_parses_json_object() {
        let assistant = assistant_returning(Ok(r#"{"name": "Ana Pop", "skills": ["Rust"]}"#));
        match assistant.extract_resume("Ana Pop\nRust") {
            Extraction::Parsed(map) => {
                assert_eq!(map["name"], "Ana Pop");
                assert_eq!(map["skills"], serde_json::json!(["Rust"]));
            }
            other => panic!("expected parsed extraction, got {other:?}"),
        }
    }

    #[test]
    fn extract_non_json_reply_is_recovered() {
        let assistant = assistant_returning(Ok("Sorry, I cannot help with that."));
        let extraction = assistant.extract_resume("some text");
        assert_eq!(
            extraction,
            Extraction::Failed {
                error: prompts::EXTRACT_PARSE_FAILED.into(),
                raw: "Sorry, I cannot help with that.".into(),
            }
        );
        let value = extraction.to_value();
        assert!(value.get("error").is_some());
        assert_eq!(value["raw"], "Sorry, I cannot help with that.");
    }

    #[test]
    fn extract_non_object_json_is_a_failure() {
        let assistant = assistant_returning(Ok("[1, 2, 3]"));
        assert!(matches!(
            assistant.extract_resume("x"),
            Extraction::Failed { .. }
        ));
    }

    #[test]
    fn extract_sentinel_is_a_failure_carrying_the_sentinel() {
        let assistant = assistant_returning(Err(AiError::Http("connection refused".into())));
        match assistant.extract_resume("x") {
            Extraction::Failed { raw, .. } => assert!(is_ai_error(&raw)),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn extract_prompt_carries_schema_and_text() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .withf(|p| p.system.contains("\"bullets\"") && p.user.ends_with("RAW CV TEXT"))
            .returning(|_| Ok("{}".into()));

        let assistant = AiAssistant::new(Box::new(generator));
        assert_eq!(
            assistant.extract_resume("RAW CV TEXT"),
            Extraction::Parsed(Map::new())
        );
    }

    #[test]
    fn regenerate_prompt_names_field_and_embeds_resume() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .withf(|p| p.user.contains("'skills'") && p.user.contains("\"name\": \"Ana\""))
            .returning(|_| Ok("[\"Rust\"]".into()));

        let assistant = AiAssistant::new(Box::new(generator));
        let resume = Resume {
            name: "Ana".into(),
            ..Resume::default()
        };
        assert_eq!(
            assistant.regenerate_field(ReviewField::Skills, &resume),
            "[\"Rust\"]"
        );
    }

    #[test]
    fn rewrite_prompt_contains_text_and_instruction() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .withf(|p| p.user.contains("old text") && p.user.contains("make it shorter"))
            .returning(|_| Ok("new text".into()));

        let assistant = AiAssistant::new(Box::new(generator));
        assert_eq!(
            assistant.rewrite_text("old text", "make it shorter"),
            "new text"
        );
    }
}
