//! Renderer adapters.

mod html;

pub use html::HtmlRenderer;
