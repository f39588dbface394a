//! The resume record.
//!
//! # Shape
//!
//! Text attributes are plain `String`s; a non-string value loaded into one
//! is kept as its JSON text. Everything else (`experience`, `projects`,
//! `education`, `skills`, `languages`, `hobbies`, `contact`) is a raw
//! [`serde_json::Value`] and is stored exactly as given. Only the four
//! lists the themes iterate over are checked, by [`Resume::validate`].
//!
//! # Persistence
//!
//! [`Resume::to_dict`] emits every attribute in a fixed key order;
//! [`Resume::from_dict`] copies known keys only and leaves the rest at their
//! defaults.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::trace;

use crate::domain::error::DomainError;
use crate::domain::field::{AiOutput, ReviewField};

/// Persisted keys, in serialization order.
pub const RESUME_KEYS: [&str; 13] = [
    "name",
    "title",
    "summary",
    "experience",
    "projects",
    "education",
    "skills",
    "languages",
    "hobbies",
    "contact",
    "photo_base64",
    "theme",
    "sidebar_color",
];

pub const DEFAULT_THEME: &str = "premium";
pub const DEFAULT_SIDEBAR_COLOR: &str = "teal";

// ── Typed entries ────────────────────────────────────────────────────────────

/// The usual contact block. Loaded records may hold any mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub location: String,
}

impl Contact {
    pub fn new(
        phone: impl Into<String>,
        email: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            phone: phone.into(),
            email: email.into(),
            location: location.into(),
        }
    }

    fn to_value(&self) -> Value {
        json!({
            "phone": self.phone,
            "email": self.email,
            "location": self.location,
        })
    }
}

/// One job in the `experience` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub bullets: Vec<String>,
}

impl ExperienceEntry {
    pub fn new(
        role: impl Into<String>,
        company: impl Into<String>,
        period: impl Into<String>,
        bullets: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            role: role.into(),
            company: company.into(),
            period: period.into(),
            bullets: bullets.into_iter().map(Into::into).collect(),
        }
    }

    fn to_value(&self) -> Value {
        json!({
            "role": self.role,
            "company": self.company,
            "period": self.period,
            "bullets": self.bullets,
        })
    }
}

/// One item in the `projects` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub period: String,
    pub description: String,
}

impl ProjectEntry {
    pub fn new(
        name: impl Into<String>,
        period: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            period: period.into(),
            description: description.into(),
        }
    }

    fn to_value(&self) -> Value {
        json!({
            "name": self.name,
            "period": self.period,
            "description": self.description,
        })
    }
}

/// One item in the `education` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub period: String,
}

impl EducationEntry {
    pub fn new(
        degree: impl Into<String>,
        school: impl Into<String>,
        period: impl Into<String>,
    ) -> Self {
        Self {
            degree: degree.into(),
            school: school.into(),
            period: period.into(),
        }
    }

    fn to_value(&self) -> Value {
        json!({
            "degree": self.degree,
            "school": self.school,
            "period": self.period,
        })
    }
}

// ── Resume ───────────────────────────────────────────────────────────────────

/// The whole profile: rendered by a theme, edited by the review wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct Resume {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub experience: Value,
    pub projects: Value,
    pub education: Value,
    pub skills: Value,
    pub languages: Value,
    pub hobbies: Value,
    pub contact: Value,
    /// Base64 text of the photo; empty when there is none.
    pub photo_base64: String,
    pub theme: String,
    pub sidebar_color: String,
}

impl Default for Resume {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            summary: String::new(),
            experience: Value::Array(Vec::new()),
            projects: Value::Array(Vec::new()),
            education: Value::Array(Vec::new()),
            skills: Value::Array(Vec::new()),
            languages: Value::Array(Vec::new()),
            hobbies: Value::Array(Vec::new()),
            contact: Value::Object(Map::new()),
            photo_base64: String::new(),
            theme: DEFAULT_THEME.to_string(),
            sidebar_color: DEFAULT_SIDEBAR_COLOR.to_string(),
        }
    }
}

impl Resume {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Construction helpers ──────────────────────────────────────────────

    pub fn with_experience(mut self, entries: &[ExperienceEntry]) -> Self {
        self.experience = Value::Array(entries.iter().map(ExperienceEntry::to_value).collect());
        self
    }

    pub fn with_projects(mut self, entries: &[ProjectEntry]) -> Self {
        self.projects = Value::Array(entries.iter().map(ProjectEntry::to_value).collect());
        self
    }

    pub fn with_education(mut self, entries: &[EducationEntry]) -> Self {
        self.education = Value::Array(entries.iter().map(EducationEntry::to_value).collect());
        self
    }

    pub fn with_skills(mut self, skills: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.skills = string_array(skills);
        self
    }

    pub fn with_languages(mut self, languages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.languages = string_array(languages);
        self
    }

    pub fn with_hobbies(mut self, hobbies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.hobbies = string_array(hobbies);
        self
    }

    pub fn with_contact(mut self, contact: &Contact) -> Self {
        self.contact = contact.to_value();
        self
    }

    // ── Validation ────────────────────────────────────────────────────────

    /// Shape check: the four list attributes must be JSON arrays.
    ///
    /// Nothing else is checked; free text is accepted as-is.
    pub fn validate(&self) -> Result<(), DomainError> {
        let lists = [
            ("experience", &self.experience),
            ("projects", &self.projects),
            ("education", &self.education),
            ("skills", &self.skills),
        ];
        for (field, value) in lists {
            if !value.is_array() {
                return Err(DomainError::Shape {
                    field,
                    found: json_kind(value).to_string(),
                });
            }
        }
        Ok(())
    }

    // ── Updates ───────────────────────────────────────────────────────────

    /// Overwrite every known attribute named in `updates`.
    ///
    /// Each matched key replaces the whole attribute (no deep merge); unknown
    /// keys are ignored. Text attributes take a string as-is, `null` as
    /// empty text and any other value as its JSON text.
    pub fn merge(&mut self, updates: &Map<String, Value>) {
        for (key, value) in updates {
            match key.as_str() {
                "name" => self.name = text(value),
                "title" => self.title = text(value),
                "summary" => self.summary = text(value),
                "experience" => self.experience = value.clone(),
                "projects" => self.projects = value.clone(),
                "education" => self.education = value.clone(),
                "skills" => self.skills = value.clone(),
                "languages" => self.languages = value.clone(),
                "hobbies" => self.hobbies = value.clone(),
                "contact" => self.contact = value.clone(),
                "photo_base64" => self.photo_base64 = text(value),
                "theme" => self.theme = text(value),
                "sidebar_color" => self.sidebar_color = text(value),
                other => trace!(key = other, "ignoring unknown resume key"),
            }
        }
    }

    /// Store `bytes` as base64 text. No format or size checks.
    pub fn set_photo(&mut self, bytes: &[u8]) {
        self.photo_base64 = BASE64.encode(bytes);
    }

    pub fn has_photo(&self) -> bool {
        !self.photo_base64.is_empty()
    }

    /// The photo payload when it is well-formed standard base64, safe to
    /// place in a data URI unescaped.
    pub fn embeddable_photo(&self) -> Option<&str> {
        let photo = self.photo_base64.as_str();
        (!photo.is_empty() && BASE64.decode(photo).is_ok()).then_some(photo)
    }

    /// Media type for the photo data URI, sniffed from the payload's magic
    /// bytes. Defaults to JPEG.
    pub fn photo_mime(&self) -> &'static str {
        // 16 base64 chars decode to the 12 bytes the WebP check needs.
        let end = self.photo_base64.len().min(16);
        let head = self
            .photo_base64
            .get(..end)
            .and_then(|prefix| BASE64.decode(prefix).ok())
            .unwrap_or_default();

        if head.starts_with(b"\x89PNG") {
            "image/png"
        } else if head.starts_with(b"GIF8") {
            "image/gif"
        } else if head.starts_with(b"RIFF") && head.get(8..12) == Some(b"WEBP".as_slice()) {
            "image/webp"
        } else {
            "image/jpeg"
        }
    }

    // ── Review wizard access ──────────────────────────────────────────────

    /// Current value of a reviewable field.
    pub fn field_value(&self, field: ReviewField) -> Value {
        match field {
            ReviewField::Summary => Value::String(self.summary.clone()),
            ReviewField::Experience => self.experience.clone(),
            ReviewField::Projects => self.projects.clone(),
            ReviewField::Education => self.education.clone(),
            ReviewField::Skills => self.skills.clone(),
        }
    }

    /// Store an AI reply into a reviewable field.
    pub fn apply_output(&mut self, field: ReviewField, output: AiOutput) {
        match field {
            ReviewField::Summary => self.summary = output.into_text(),
            ReviewField::Experience => self.experience = output.into_value(),
            ReviewField::Projects => self.projects = output.into_value(),
            ReviewField::Education => self.education = output.into_value(),
            ReviewField::Skills => self.skills = output.into_value(),
        }
    }

    // ── Serialization ─────────────────────────────────────────────────────

    /// Every attribute, keyed as persisted, in [`RESUME_KEYS`] order.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".into(), Value::from(self.name.as_str()));
        map.insert("title".into(), Value::from(self.title.as_str()));
        map.insert("summary".into(), Value::from(self.summary.as_str()));
        map.insert("experience".into(), self.experience.clone());
        map.insert("projects".into(), self.projects.clone());
        map.insert("education".into(), self.education.clone());
        map.insert("skills".into(), self.skills.clone());
        map.insert("languages".into(), self.languages.clone());
        map.insert("hobbies".into(), self.hobbies.clone());
        map.insert("contact".into(), self.contact.clone());
        map.insert(
            "photo_base64".into(),
            Value::from(self.photo_base64.as_str()),
        );
        map.insert("theme".into(), Value::from(self.theme.as_str()));
        map.insert(
            "sidebar_color".into(),
            Value::from(self.sidebar_color.as_str()),
        );
        map
    }

    /// Pretty-printed JSON document.
    pub fn to_json(&self) -> String {
        format!("{:#}", Value::Object(self.to_dict()))
    }

    /// Build a record from a mapping: known keys copied, unknown keys
    /// ignored, missing keys left at their defaults.
    pub fn from_dict(map: &Map<String, Value>) -> Self {
        let mut resume = Self::default();
        resume.merge(map);
        resume
    }
}

impl Serialize for Resume {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::Object(self.to_dict()).serialize(serializer)
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn string_array(items: impl IntoIterator<Item = impl Into<String>>) -> Value {
    Value::Array(items.into_iter().map(|s| Value::String(s.into())).collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
