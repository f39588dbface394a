//! Reviewable fields and the parse-or-raw value produced by AI replies.

use std::fmt;

use serde_json::Value;

// ── ReviewField ──────────────────────────────────────────────────────────────

/// A resume attribute the review wizard walks over, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewField {
    Summary,
    Experience,
    Projects,
    Education,
    Skills,
}

impl ReviewField {
    /// Fixed wizard order.
    pub const ALL: [ReviewField; 5] = [
        Self::Summary,
        Self::Experience,
        Self::Projects,
        Self::Education,
        Self::Skills,
    ];

    /// The persisted key of this field.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Skills => "skills",
        }
    }
}

impl fmt::Display for ReviewField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ── AiOutput ─────────────────────────────────────────────────────────────────

/// An AI reply after one parsing attempt: structured JSON when the text
/// parses, the untouched reply otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum AiOutput {
    Parsed(Value),
    Raw(String),
}

impl AiOutput {
    /// Parse a reply. Surrounding whitespace and a Markdown code fence
    /// (```` ```json ```` or bare ```` ``` ````) are stripped first.
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<Value>(strip_json_fences(text)) {
            Ok(value) => Self::Parsed(value),
            Err(_) => Self::Raw(text.to_string()),
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }

    /// Text form for single-line fields: JSON strings verbatim, other JSON
    /// compact, raw text as-is.
    pub fn into_text(self) -> String {
        match self {
            Self::Parsed(Value::String(s)) => s,
            Self::Parsed(other) => other.to_string(),
            Self::Raw(text) => text,
        }
    }

    /// JSON form for list fields: raw text becomes a JSON string.
    pub fn into_value(self) -> Value {
        match self {
            Self::Parsed(value) => value,
            Self::Raw(text) => Value::String(text),
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(stripped) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    stripped
        .trim_start()
        .strip_suffix("```")
        .map(str::trim)
        .unwrap_or(stripped.trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_are_in_wizard_order() {
        let keys: Vec<_> = ReviewField::ALL.iter().map(ReviewField::key).collect();
        assert_eq!(
            keys,
            ["summary", "experience", "projects", "education", "skills"]
        );
    }

    #[test]
    fn json_reply_is_parsed() {
        assert_eq!(
            AiOutput::from_text(r#"["Rust", "SQL"]"#),
            AiOutput::Parsed(json!(["Rust", "SQL"]))
        );
    }

    #[test]
    fn fenced_json_reply_is_parsed() {
        let reply = "```json\n{\"role\": \"Engineer\"}\n```";
        assert_eq!(
            AiOutput::from_text(reply),
            AiOutput::Parsed(json!({"role": "Engineer"}))
        );
    }

    #[test]
    fn bare_fence_is_stripped() {
        assert_eq!(
            AiOutput::from_text("```\n[1, 2]\n```"),
            AiOutput::Parsed(json!([1, 2]))
        );
    }

    #[test]
    fn prose_reply_stays_raw() {
        let reply = "Seasoned engineer with ten years of experience.";
        assert_eq!(AiOutput::from_text(reply), AiOutput::Raw(reply.into()));
    }

    #[test]
    fn text_form_unwraps_json_strings() {
        assert_eq!(AiOutput::from_text("\"Hello\"").into_text(), "Hello");
        assert_eq!(AiOutput::from_text("[1,2]").into_text(), "[1,2]");
        assert_eq!(AiOutput::Raw("plain".into()).into_text(), "plain");
    }

    #[test]
    fn value_form_wraps_raw_text() {
        assert_eq!(
            AiOutput::Raw("not a list".into()).into_value(),
            Value::String("not a list".into())
        );
    }
}
