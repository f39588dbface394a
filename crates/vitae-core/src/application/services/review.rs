//! Review wizard - walk the reviewable fields and let the user accept, edit
//! with an instruction, regenerate, or skip each one.
//!
//! The wizard is a fixed sequence of steps, one per [`ReviewField`], driven
//! by an injected [`ReviewPrompter`]. Each step:
//!
//! 1. shows the field's current value,
//! 2. reads a [`ReviewChoice`],
//! 3. applies it, storing AI replies through [`AiOutput`],
//! 4. reports the [`FieldOutcome`] back to the prompter.
//!
//! Persisting the record is the caller's job once [`ReviewWizard::run`]
//! returns. There is no undo and no early exit.

use std::fmt;

use tracing::{info, instrument};

use crate::application::ports::ReviewPrompter;
use crate::application::services::assistant::{AiAssistant, is_ai_error};
use crate::domain::{AiOutput, Resume, ReviewField};
use crate::error::VitaeResult;

/// What the user picked for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewChoice {
    Accept,
    Edit,
    Regenerate,
    Skip,
    /// Anything else; carries the trimmed input.
    Invalid(String),
}

impl ReviewChoice {
    /// Menu line shown before each choice.
    pub const MENU: &'static str =
        "Options: [a] Accept  [e] Edit (AI rewrite)  [r] Regenerate  [s] Skip";

    /// Parse a typed answer: `a`/`e`/`r`/`s` or the full word, any case.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "a" | "accept" => Self::Accept,
            "e" | "edit" => Self::Edit,
            "r" | "regenerate" => Self::Regenerate,
            "s" | "skip" => Self::Skip,
            _ => Self::Invalid(trimmed.to_string()),
        }
    }
}

/// How a field's value was stored after an AI reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stored {
    /// The reply parsed as JSON and was stored as structure.
    Parsed,
    /// The reply was stored as plain text.
    Raw,
}

impl From<&AiOutput> for Stored {
    fn from(output: &AiOutput) -> Self {
        if output.is_parsed() {
            Self::Parsed
        } else {
            Self::Raw
        }
    }
}

/// What happened to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Accepted,
    Skipped,
    Rewritten(Stored),
    Regenerated(Stored),
    /// The input was not a known choice; the field is unchanged.
    InvalidChoice(String),
    /// The AI call failed; the field is unchanged. Carries the sentinel text.
    AiFailed(String),
}

impl FieldOutcome {
    /// Whether the field's value changed.
    pub fn changed(&self) -> bool {
        matches!(self, Self::Rewritten(_) | Self::Regenerated(_))
    }
}

impl fmt::Display for FieldOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stored = |s: &Stored| match s {
            Stored::Parsed => "stored as JSON",
            Stored::Raw => "stored as text",
        };
        match self {
            Self::Accepted => f.write_str("accepted"),
            Self::Skipped => f.write_str("skipped"),
            Self::Rewritten(s) => write!(f, "rewritten, {}", stored(s)),
            Self::Regenerated(s) => write!(f, "regenerated, {}", stored(s)),
            Self::InvalidChoice(input) => {
                write!(f, "unknown choice '{input}', left unchanged")
            }
            Self::AiFailed(text) => write!(f, "{text}, left unchanged"),
        }
    }
}

/// Per-field outcomes of one wizard run, in wizard order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewReport {
    pub outcomes: Vec<(ReviewField, FieldOutcome)>,
}

impl ReviewReport {
    pub fn changed_fields(&self) -> Vec<ReviewField> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.changed())
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn outcome(&self, field: ReviewField) -> Option<&FieldOutcome> {
        self.outcomes
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, outcome)| outcome)
    }
}

/// The interactive review loop.
pub struct ReviewWizard<'a, P: ReviewPrompter> {
    assistant: &'a AiAssistant,
    prompter: P,
}

impl<'a, P: ReviewPrompter> ReviewWizard<'a, P> {
    pub fn new(assistant: &'a AiAssistant, prompter: P) -> Self {
        Self {
            assistant,
            prompter,
        }
    }

    /// Review every field of `resume` in order, mutating it in place.
    #[instrument(skip_all, fields(resume = %resume.name))]
    pub fn run(&mut self, resume: &mut Resume) -> VitaeResult<ReviewReport> {
        let mut report = ReviewReport::default();

        for field in ReviewField::ALL {
            let outcome = self.step(field, resume)?;
            info!(field = %field, outcome = %outcome, "field reviewed");
            self.prompter.report(field, &outcome)?;
            report.outcomes.push((field, outcome));
        }

        Ok(report)
    }

    fn step(&mut self, field: ReviewField, resume: &mut Resume) -> VitaeResult<FieldOutcome> {
        let current = resume.field_value(field);
        self.prompter.show_field(field, &current)?;

        let outcome = match self.prompter.choose(field)? {
            ReviewChoice::Accept => FieldOutcome::Accepted,
            ReviewChoice::Skip => FieldOutcome::Skipped,
            ReviewChoice::Invalid(input) => FieldOutcome::InvalidChoice(input),
            ReviewChoice::Edit => {
                let instruction = self.prompter.instruction(field)?;
                let reply = self
                    .assistant
                    .rewrite_text(&current.to_string(), &instruction);
                store(resume, field, reply, FieldOutcome::Rewritten)
            }
            ReviewChoice::Regenerate => {
                let reply = self.assistant.regenerate_field(field, resume);
                store(resume, field, reply, FieldOutcome::Regenerated)
            }
        };
        Ok(outcome)
    }

    /// Give the prompter back, e.g. to inspect a scripted double.
    pub fn into_prompter(self) -> P {
        self.prompter
    }
}

fn store(
    resume: &mut Resume,
    field: ReviewField,
    reply: String,
    outcome: fn(Stored) -> FieldOutcome,
) -> FieldOutcome {
    if is_ai_error(&reply) {
        return FieldOutcome::AiFailed(reply);
    }
    let output = AiOutput::from_text(&reply);
    let stored = Stored::from(&output);
    resume.apply_output(field, output);
    outcome(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use serde_json::{Value, json};

    use crate::application::error::AiError;
    use crate::application::ports::{ChatPrompt, MockTextGenerator};
    use crate::domain::ExperienceEntry;

    /// Scripted prompter: answers from queues, records what it was shown.
    #[derive(Default)]
    struct Script {
        choices: VecDeque<&'static str>,
        instructions: VecDeque<&'static str>,
        shown: Vec<(ReviewField, Value)>,
        reported: Vec<(ReviewField, FieldOutcome)>,
    }

    impl Script {
        fn new(choices: &[&'static str], instructions: &[&'static str]) -> Self {
            Self {
                choices: choices.iter().copied().collect(),
                instructions: instructions.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl ReviewPrompter for Script {
        fn show_field(&mut self, field: ReviewField, current: &Value) -> VitaeResult<()> {
            self.shown.push((field, current.clone()));
            Ok(())
        }

        fn choose(&mut self, _field: ReviewField) -> VitaeResult<ReviewChoice> {
            Ok(ReviewChoice::parse(self.choices.pop_front().unwrap_or("s")))
        }

        fn instruction(&mut self, _field: ReviewField) -> VitaeResult<String> {
            Ok(self.instructions.pop_front().unwrap_or_default().to_string())
        }

        fn report(&mut self, field: ReviewField, outcome: &FieldOutcome) -> VitaeResult<()> {
            self.reported.push((field, outcome.clone()));
            Ok(())
        }
    }

    fn resume() -> Resume {
        Resume {
            name: "Ana Pop".into(),
            summary: "Engineer.".into(),
            ..Resume::default()
        }
        .with_experience(&[ExperienceEntry::new(
            "Engineer",
            "Acme",
            "2020-2023",
            ["Built X"],
        )])
        .with_skills(["Rust"])
    }

    fn assistant<F>(reply: F) -> AiAssistant
    where
        F: Fn(&ChatPrompt) -> Result<String, AiError> + Send + 'static,
    {
        let mut generator = MockTextGenerator::new();
        generator.expect_generate().returning(reply);
        AiAssistant::new(Box::new(generator))
    }

    fn silent_assistant() -> AiAssistant {
        let mut generator = MockTextGenerator::new();
        generator.expect_generate().never();
        AiAssistant::new(Box::new(generator))
    }

    #[test]
    fn choice_parsing() {
        assert_eq!(ReviewChoice::parse("a"), ReviewChoice::Accept);
        assert_eq!(ReviewChoice::parse(" E \n"), ReviewChoice::Edit);
        assert_eq!(ReviewChoice::parse("Regenerate"), ReviewChoice::Regenerate);
        assert_eq!(ReviewChoice::parse("skip"), ReviewChoice::Skip);
        assert_eq!(
            ReviewChoice::parse(" x "),
            ReviewChoice::Invalid("x".into())
        );
    }

    #[test]
    fn accept_and_skip_leave_record_unchanged() {
        let assistant = silent_assistant();
        let mut record = resume();
        let before = record.clone();

        let mut wizard = ReviewWizard::new(&assistant, Script::new(&["a", "s", "a", "s", "a"], &[]));
        let report = wizard.run(&mut record).unwrap();

        assert_eq!(record, before);
        assert!(report.changed_fields().is_empty());
        assert_eq!(report.outcomes.len(), 5);
    }

    #[test]
    fn fields_are_shown_in_order_with_current_values() {
        let assistant = silent_assistant();
        let mut record = resume();
        let mut wizard = ReviewWizard::new(&assistant, Script::new(&[], &[]));
        wizard.run(&mut record).unwrap();

        let script = wizard.into_prompter();
        let fields: Vec<_> = script.shown.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, ReviewField::ALL);
        assert_eq!(script.shown[0].1, json!("Engineer."));
        assert_eq!(script.shown[4].1, json!(["Rust"]));
        assert_eq!(script.reported.len(), 5);
    }

    #[test]
    fn edit_with_json_reply_stores_structure() {
        let assistant = assistant(|p| {
            assert!(p.user.contains("[\"Rust\"]"));
            assert!(p.user.contains("add SQL"));
            Ok("[\"Rust\", \"SQL\"]".into())
        });
        let mut record = resume();
        let mut wizard =
            ReviewWizard::new(&assistant, Script::new(&["a", "a", "a", "a", "e"], &["add SQL"]));
        let report = wizard.run(&mut record).unwrap();

        assert_eq!(record.skills, json!(["Rust", "SQL"]));
        assert_eq!(
            report.outcome(ReviewField::Skills),
            Some(&FieldOutcome::Rewritten(Stored::Parsed))
        );
        assert_eq!(report.changed_fields(), [ReviewField::Skills]);
    }

    #[test]
    fn edit_with_prose_reply_stores_raw_text() {
        let assistant = assistant(|_| Ok("A sharper summary.".into()));
        let mut record = resume();
        let mut wizard = ReviewWizard::new(&assistant, Script::new(&["e"], &["tighten"]));
        let report = wizard.run(&mut record).unwrap();

        assert_eq!(record.summary, "A sharper summary.");
        assert_eq!(
            report.outcome(ReviewField::Summary),
            Some(&FieldOutcome::Rewritten(Stored::Raw))
        );
    }

    #[test]
    fn regenerate_prose_into_list_field_is_stored_as_text() {
        let assistant = assistant(|p| {
            assert!(p.user.contains("'projects'"));
            Ok("Built a ledger service.".into())
        });
        let mut record = resume();
        let mut wizard = ReviewWizard::new(&assistant, Script::new(&["a", "a", "r"], &[]));
        wizard.run(&mut record).unwrap();

        assert_eq!(record.projects, json!("Built a ledger service."));
        assert!(record.validate().is_err());
    }

    #[test]
    fn regenerate_with_fenced_json_is_parsed() {
        let assistant =
            assistant(|_| Ok("```json\n[{\"degree\": \"BSc\", \"school\": \"UBB\", \"period\": \"2019\"}]\n```".into()));
        let mut record = resume();
        let mut wizard = ReviewWizard::new(&assistant, Script::new(&["a", "a", "a", "r"], &[]));
        let report = wizard.run(&mut record).unwrap();

        assert_eq!(record.education[0]["school"], "UBB");
        assert_eq!(
            report.outcome(ReviewField::Education),
            Some(&FieldOutcome::Regenerated(Stored::Parsed))
        );
    }

    #[test]
    fn ai_failure_leaves_field_unchanged() {
        let assistant = assistant(|_| {
            Err(AiError::MissingCredential {
                variable: "OPENAI_API_KEY",
            })
        });
        let mut record = resume();
        let before = record.clone();
        let mut wizard = ReviewWizard::new(&assistant, Script::new(&["r", "e"], &["shorter"]));
        let report = wizard.run(&mut record).unwrap();

        assert_eq!(record, before);
        match report.outcome(ReviewField::Summary) {
            Some(FieldOutcome::AiFailed(text)) => assert!(text.contains("credential")),
            other => panic!("expected AI failure, got {other:?}"),
        }
        assert!(matches!(
            report.outcome(ReviewField::Experience),
            Some(FieldOutcome::AiFailed(_))
        ));
    }

    #[test]
    fn invalid_choice_is_reported_and_loop_continues() {
        let assistant = silent_assistant();
        let mut record = resume();
        let before = record.clone();
        let mut wizard = ReviewWizard::new(&assistant, Script::new(&["x", "maybe"], &[]));
        let report = wizard.run(&mut record).unwrap();

        assert_eq!(record, before);
        assert_eq!(
            report.outcome(ReviewField::Summary),
            Some(&FieldOutcome::InvalidChoice("x".into()))
        );
        assert_eq!(
            report.outcome(ReviewField::Experience),
            Some(&FieldOutcome::InvalidChoice("maybe".into()))
        );
        assert_eq!(report.outcomes.len(), 5);
        assert_eq!(wizard.into_prompter().reported.len(), 5);
    }

    #[test]
    fn outcome_display() {
        assert_eq!(FieldOutcome::Accepted.to_string(), "accepted");
        assert_eq!(
            FieldOutcome::Rewritten(Stored::Raw).to_string(),
            "rewritten, stored as text"
        );
        assert_eq!(
            FieldOutcome::InvalidChoice("x".into()).to_string(),
            "unknown choice 'x', left unchanged"
        );
    }
}
