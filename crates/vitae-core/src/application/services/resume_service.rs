//! Resume service - file-level use cases that need no AI.
//!
//! 1. Load the record from the store
//! 2. Apply overrides / embed a photo
//! 3. Render or save back
//!
//! Rendering writes the output only once the whole document is ready, so a
//! failed render never leaves a partial file behind.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::application::ports::{ResumeRenderer, ResumeStore};
use crate::domain::Resume;
use crate::error::VitaeResult;

/// Theme choices given on the command line, applied on top of the record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeOverride {
    pub theme: Option<String>,
    pub sidebar_color: Option<String>,
}

impl ThemeOverride {
    pub fn is_empty(&self) -> bool {
        self.theme.is_none() && self.sidebar_color.is_none()
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        if let Some(theme) = &self.theme {
            map.insert("theme".into(), Value::from(theme.as_str()));
        }
        if let Some(color) = &self.sidebar_color {
            map.insert("sidebar_color".into(), Value::from(color.as_str()));
        }
        map
    }
}

pub struct ResumeService {
    store: Box<dyn ResumeStore>,
    renderer: Box<dyn ResumeRenderer>,
}

impl ResumeService {
    pub fn new(store: Box<dyn ResumeStore>, renderer: Box<dyn ResumeRenderer>) -> Self {
        Self { store, renderer }
    }

    pub fn store(&self) -> &dyn ResumeStore {
        self.store.as_ref()
    }

    /// Render `input` to `output` as a complete HTML document.
    #[instrument(
        skip_all,
        fields(input = %input.display(), output = %output.display())
    )]
    pub fn render(&self, input: &Path, output: &Path, overrides: &ThemeOverride) -> VitaeResult<()> {
        let mut resume = self.store.load(input)?;
        if !overrides.is_empty() {
            resume.merge(&overrides.to_map());
        }

        let html = self.renderer.render(&resume)?;
        self.store.write_text(output, &html)?;

        info!(theme = %resume.theme, bytes = html.len(), "Resume rendered");
        Ok(())
    }

    /// Embed the image at `image` into the record at `resume_path`.
    #[instrument(skip_all, fields(resume = %resume_path.display(), image = %image.display()))]
    pub fn set_photo(&self, resume_path: &Path, image: &Path) -> VitaeResult<Resume> {
        let mut resume = self.store.load(resume_path)?;
        let bytes = self.store.read_bytes(image)?;
        resume.set_photo(&bytes);
        self.store.save(&resume, resume_path)?;

        info!(bytes = bytes.len(), "Photo embedded");
        Ok(resume)
    }
}
