//! Themed HTML renderer backed by minijinja.
//!
//! Undefined values are errors: an experience entry without `bullets` fails
//! the render instead of producing a document with a hole in it.
//!
//! `languages`, `hobbies` and `contact` accept any JSON shape on load, so the
//! templates see display views of them instead of the raw values.

use minijinja::{AutoEscape, Environment, UndefinedBehavior, context};
use serde_json::{Value, json};
use tracing::{debug, instrument, warn};

use vitae_core::{
    application::{ApplicationError, ports::ResumeRenderer},
    domain::{Resume, Theme},
    error::VitaeResult,
};

const PREMIUM: &str = include_str!("templates/premium.html");
const MINIMAL: &str = include_str!("templates/minimal.html");
const CREATIVE: &str = include_str!("templates/creative.html");
const SIDEBAR: &str = include_str!("templates/sidebar.html");

/// Replaced with the sidebar hex before the template pass.
const SIDEBAR_COLOR_PLACEHOLDER: &str = "__SIDEBAR_COLOR__";

/// Production renderer: four embedded layouts, HTML auto-escaping.
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        Self { env }
    }

    /// Template body for a resolved theme, sidebar colour already substituted.
    fn source(theme: Theme) -> String {
        match theme {
            Theme::Premium => PREMIUM.to_string(),
            Theme::Minimal => MINIMAL.to_string(),
            Theme::Creative => CREATIVE.to_string(),
            Theme::Sidebar(color) => SIDEBAR.replace(SIDEBAR_COLOR_PLACEHOLDER, color.hex()),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeRenderer for HtmlRenderer {
    #[instrument(skip_all, fields(theme = %resume.theme))]
    fn render(&self, resume: &Resume) -> VitaeResult<String> {
        resume.validate()?;
        let theme = Theme::resolve(&resume.theme, &resume.sidebar_color)?;

        let photo = resume.embeddable_photo();
        if photo.is_none() && resume.has_photo() {
            warn!("photo_base64 is not valid base64, leaving the photo out");
        }

        let source = Self::source(theme);
        let fragment = self
            .env
            .render_str(
                &source,
                context! {
                    resume => resume,
                    photo => photo,
                    photo_mime => resume.photo_mime(),
                    languages => display_list(&resume.languages),
                    hobbies => display_list(&resume.hobbies),
                    contact => contact_view(&resume.contact),
                },
            )
            .map_err(|e| ApplicationError::RenderingFailed {
                reason: e.to_string(),
            })?;

        debug!(%theme, bytes = fragment.len(), "Template rendered");
        Ok(wrap(&fragment))
    }
}

/// Strings as-is, `null` as nothing, anything else as JSON text.
fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn display_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(display).collect(),
        Value::Null => Vec::new(),
        single => vec![display(single)],
    }
}

/// Phone, email and location as text, empty when absent.
fn contact_view(contact: &Value) -> Value {
    let part = |key: &str| contact.get(key).map(display).unwrap_or_default();
    json!({
        "phone": part("phone"),
        "email": part("email"),
        "location": part("location"),
    })
}

/// The fixed document shell around every theme.
fn wrap(content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<style>
body {{
    font-family: Arial, sans-serif;
    margin: 0;
    padding: 0;
}}
</style>
</head>
<body>
{content}
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_core::{
        domain::{Contact, DomainError, ExperienceEntry, ProjectEntry},
        error::VitaeError,
    };

    fn ana() -> Resume {
        Resume {
            name: "Ana Pop".into(),
            title: "Engineer".into(),
            summary: "Builds things.".into(),
            ..Resume::default()
        }
        .with_experience(&[ExperienceEntry::new(
            "Engineer",
            "Acme",
            "2020-2023",
            ["Built X", "Shipped Y"],
        )])
        .with_skills(["Rust", "SQL"])
    }

    fn render(resume: &Resume) -> VitaeResult<String> {
        HtmlRenderer::new().render(resume)
    }

    #[test]
    fn premium_contains_record_text() {
        let html = render(&ana()).unwrap();
        for needle in ["Ana Pop", "Engineer", "Acme", "Built X", "Shipped Y", "SQL"] {
            assert!(html.contains(needle), "missing {needle}");
        }
        assert!(!html.contains("<img"));
    }

    #[test]
    fn document_shell() {
        let html = render(&ana()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains("font-family: Arial, sans-serif;"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn every_theme_renders() {
        for theme in Theme::NAMES {
            let resume = Resume {
                theme: theme.into(),
                ..ana()
            };
            let html = render(&resume).unwrap();
            assert!(html.contains("Ana Pop"), "{theme} lost the name");
        }
    }

    #[test]
    fn text_is_escaped() {
        let resume = Resume {
            name: "<script>alert(1)</script>".into(),
            ..ana()
        };
        let html = render(&resume).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let resume = Resume {
            theme: "neon".into(),
            ..ana()
        };
        let err = render(&resume).unwrap_err();
        assert!(matches!(
            err,
            VitaeError::Domain(DomainError::UnknownTheme { ref theme }) if theme == "neon"
        ));
    }

    #[test]
    fn sidebar_colours() {
        let sidebar = |color: &str| Resume {
            theme: "sidebar".into(),
            sidebar_color: color.into(),
            ..ana()
        };

        assert!(render(&sidebar("green")).unwrap().contains("background:#2e7d32;"));
        assert!(render(&sidebar("mono")).unwrap().contains("background:#222;"));

        let teal = render(&sidebar("teal")).unwrap();
        assert!(teal.contains("background:#004d4d;"));
        assert_eq!(render(&sidebar("purple")).unwrap(), teal);
        assert!(!teal.contains(SIDEBAR_COLOR_PLACEHOLDER));
    }

    #[test]
    fn sidebar_shows_contact_and_lists() {
        let resume = Resume {
            theme: "sidebar".into(),
            ..ana()
        }
        .with_languages(["Romanian"])
        .with_hobbies(["Chess"])
        .with_contact(&Contact::new("", "ana@example.com", "Cluj"));

        let html = render(&resume).unwrap();
        for needle in ["ana@example.com", "Cluj", "Romanian", "Chess", "Rust"] {
            assert!(html.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn sidebar_renders_loose_shapes() {
        let resume = Resume {
            theme: "sidebar".into(),
            languages: json!([{ "name": "English", "level": "C1" }, "Romanian"]),
            hobbies: json!("chess"),
            contact: json!({ "phone": 40700000000_u64 }),
            ..ana()
        };

        let html = render(&resume).unwrap();
        for needle in ["English", "C1", "Romanian", "chess", "40700000000"] {
            assert!(html.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn missing_contact_renders_empty() {
        let resume = Resume {
            theme: "sidebar".into(),
            contact: json!(null),
            languages: json!(null),
            ..ana()
        };
        assert!(render(&resume).unwrap().contains("Ana Pop"));
    }

    #[test]
    fn creative_lists_projects() {
        let resume = Resume {
            theme: "creative".into(),
            ..ana()
        }
        .with_projects(&[ProjectEntry::new("Ledger", "2022", "Double-entry books")]);

        let html = render(&resume).unwrap();
        assert!(html.contains("Ledger"));
        assert!(html.contains("Double-entry books"));
    }

    #[test]
    fn missing_nested_field_is_a_render_error() {
        let resume = Resume {
            experience: json!([{ "role": "Engineer", "company": "Acme", "period": "2020" }]),
            ..ana()
        };
        let err = render(&resume).unwrap_err();
        assert!(matches!(
            err,
            VitaeError::Application(ApplicationError::RenderingFailed { .. })
        ));
    }

    #[test]
    fn non_list_field_fails_validation() {
        let resume = Resume {
            skills: json!("Rust, SQL"),
            ..ana()
        };
        let err = render(&resume).unwrap_err();
        assert!(matches!(
            err,
            VitaeError::Domain(DomainError::Shape {
                field: "skills",
                ..
            })
        ));
    }

    #[test]
    fn photo_is_embedded_as_data_uri() {
        let mut resume = ana();
        resume.set_photo(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR");

        let html = render(&resume).unwrap();
        let uri = format!("data:image/png;base64,{}", resume.photo_base64);
        assert!(html.contains(&uri));
    }

    #[test]
    fn jpeg_is_the_default_media_type() {
        let mut resume = Resume {
            theme: "sidebar".into(),
            ..ana()
        };
        resume.set_photo(&[0xff, 0xd8, 0xff, 0xe0, 0, 0x10]);

        let html = render(&resume).unwrap();
        assert!(html.contains("data:image/jpeg;base64,/9j/"));
    }

    #[test]
    fn malformed_photo_is_left_out() {
        for theme in ["premium", "sidebar"] {
            let resume = Resume {
                theme: theme.into(),
                photo_base64: r#"x" onerror="alert(1)"#.into(),
                ..ana()
            };

            let html = render(&resume).unwrap();
            assert!(!html.contains("onerror"), "{theme} leaked the attribute");
            assert!(!html.contains("<img"), "{theme} kept the image");
        }
    }
}
