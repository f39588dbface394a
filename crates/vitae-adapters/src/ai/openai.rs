//! OpenAI-compatible chat completions client.
//!
//! One blocking request per call, no retries. Settings are passed in
//! explicitly; this module never reads the environment.

#![cfg_attr(not(feature = "openai"), allow(dead_code, unused_imports))]

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use vitae_core::application::{AiError, ports::ChatPrompt, ports::TextGenerator};

/// Environment variable the credential is read from (by the caller).
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const TEMPERATURE: f32 = 0.2;

/// Connection settings for [`OpenAiClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct AiSettings {
    pub api_key: Option<String>,
    /// Used when a prompt carries no model of its own.
    pub model: String,
    pub base_url: String,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// [`TextGenerator`] over the `/chat/completions` endpoint.
pub struct OpenAiClient {
    settings: AiSettings,
    #[cfg(feature = "openai")]
    http: reqwest::blocking::Client,
}

impl OpenAiClient {
    pub fn new(settings: AiSettings) -> Self {
        Self {
            settings,
            #[cfg(feature = "openai")]
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn settings(&self) -> &AiSettings {
        &self.settings
    }

    fn request<'a>(&'a self, prompt: &'a ChatPrompt) -> ChatRequest<'a> {
        ChatRequest {
            model: prompt.model.as_deref().unwrap_or(&self.settings.model),
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: TEMPERATURE,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    fn api_key(&self) -> Result<&str, AiError> {
        self.settings
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(AiError::MissingCredential {
                variable: API_KEY_VAR,
            })
    }

    #[cfg(feature = "openai")]
    fn send(&self, prompt: &ChatPrompt) -> Result<String, AiError> {
        let api_key = self.api_key()?;
        let body = self.request(prompt);
        debug!(model = body.model, url = %self.endpoint(), "Sending chat completion");

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|e| AiError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(AiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| AiError::Decode(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AiError::EmptyContent)
    }
}

impl TextGenerator for OpenAiClient {
    #[instrument(skip_all)]
    fn generate(&self, prompt: &ChatPrompt) -> Result<String, AiError> {
        #[cfg(feature = "openai")]
        {
            self.send(prompt)
        }
        #[cfg(not(feature = "openai"))]
        {
            let _ = prompt;
            Err(AiError::ClientUnavailable { library: "reqwest" })
        }
    }
}
