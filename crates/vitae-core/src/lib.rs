//! Vitae Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the vitae
//! resume builder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            vitae-cli (CLI)              │
//! │   (commands, TerminalPrompter)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ResumeService, AiAssistant, Wizard)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (TextGenerator, Renderer, Store)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     vitae-adapters (Infrastructure)     │
//! │ (HtmlRenderer, OpenAiClient, stores)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │     (Resume, Theme, ReviewField)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vitae_core::prelude::*;
//!
//! # fn run(store: Box<dyn ResumeStore>, renderer: Box<dyn ResumeRenderer>) -> VitaeResult<()> {
//! let service = ResumeService::new(store, renderer);
//! service.render(
//!     "resume.json".as_ref(),
//!     "resume.html".as_ref(),
//!     &ThemeOverride::default(),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AiAssistant, Extraction, FieldOutcome, ResumeService, ReviewChoice, ReviewReport,
        ReviewWizard, ThemeOverride, is_ai_error,
        ports::{ChatPrompt, ResumeRenderer, ResumeStore, ReviewPrompter, TextGenerator},
    };
    pub use crate::domain::{
        Contact, EducationEntry, ExperienceEntry, ProjectEntry, Resume, ReviewField,
        SidebarColor, Theme,
    };
    pub use crate::error::{VitaeError, VitaeResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
