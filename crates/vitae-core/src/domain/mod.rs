//! Core domain layer for vitae.
//!
//! Pure data and rules: the resume record, its review fields, and the theme
//! palette. No I/O and no network; rendering, persistence and AI calls are
//! reached through the ports in `crate::application`.
pub mod error;
pub mod field;
pub mod resume;
pub mod theme;

pub use error::DomainError;
pub use field::{AiOutput, ReviewField};
pub use resume::{
    Contact, DEFAULT_SIDEBAR_COLOR, DEFAULT_THEME, EducationEntry, ExperienceEntry, ProjectEntry,
    RESUME_KEYS, Resume,
};
pub use theme::{SidebarColor, Theme};
