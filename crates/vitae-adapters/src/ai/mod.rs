//! Text generation adapters.

mod openai;

pub use openai::{AiSettings, API_KEY_VAR, DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiClient};
