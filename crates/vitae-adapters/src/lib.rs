//! Infrastructure adapters for vitae.
//!
//! This crate implements the ports defined in `vitae-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod ai;
pub mod renderer;
pub mod store;

// Re-export commonly used adapters
pub use ai::{AiSettings, OpenAiClient};
pub use renderer::HtmlRenderer;
pub use store::{JsonFileStore, MemoryStore};
