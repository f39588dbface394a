//! Terminal input for the review wizard.
//!
//! With the `interactive` feature and a terminal on both ends, choices are
//! made with `dialoguer` menus. Otherwise one line is read from stdin per
//! question, which keeps `vitae review` scriptable:
//!
//! ```text
//! printf 'a\ne\nshorter\ns\ns\na\n' | vitae review resume.json
//! ```
//!
//! End of input answers every remaining question with "skip". The field
//! banner, the current value and the menu are the wizard's dialogue, so they
//! are written in quiet mode too.

use std::io::{self, BufRead, IsTerminal};

use serde_json::Value;

use vitae_core::{
    application::{ApplicationError, FieldOutcome, ReviewChoice, ports::ReviewPrompter},
    domain::ReviewField,
    error::{VitaeError, VitaeResult},
};

use crate::output::OutputManager;

/// [`ReviewPrompter`] over the process terminal.
pub struct TerminalPrompter<'a> {
    output: &'a OutputManager,
    input: Box<dyn BufRead + 'a>,
    interactive: bool,
}

impl<'a> TerminalPrompter<'a> {
    /// Menus when attached to a terminal, line input otherwise.
    pub fn new(output: &'a OutputManager) -> Self {
        let interactive = cfg!(feature = "interactive")
            && io::stdin().is_terminal()
            && io::stdout().is_terminal();
        Self {
            output,
            input: Box::new(io::stdin().lock()),
            interactive,
        }
    }

    /// Line input from `input`, never menus.
    pub fn with_input(output: &'a OutputManager, input: impl BufRead + 'a) -> Self {
        Self {
            output,
            input: Box::new(input),
            interactive: false,
        }
    }

    /// Next trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> VitaeResult<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(input_failed)?;
        Ok((read > 0).then(|| line.trim().to_string()))
    }

    #[cfg(feature = "interactive")]
    fn select(&self) -> VitaeResult<ReviewChoice> {
        let items = ["Accept", "Edit (AI rewrite)", "Regenerate", "Skip"];
        let picked = dialoguer::Select::new()
            .with_prompt("Choose")
            .items(&items)
            .default(0)
            .interact()
            .map_err(input_failed)?;
        Ok(match picked {
            0 => ReviewChoice::Accept,
            1 => ReviewChoice::Edit,
            2 => ReviewChoice::Regenerate,
            _ => ReviewChoice::Skip,
        })
    }

    #[cfg(not(feature = "interactive"))]
    fn select(&self) -> VitaeResult<ReviewChoice> {
        Ok(ReviewChoice::Skip)
    }

    #[cfg(feature = "interactive")]
    fn ask_text(&self, prompt: &str) -> VitaeResult<String> {
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(input_failed)
    }

    #[cfg(not(feature = "interactive"))]
    fn ask_text(&self, _prompt: &str) -> VitaeResult<String> {
        Ok(String::new())
    }
}

impl ReviewPrompter for TerminalPrompter<'_> {
    fn show_field(&mut self, field: ReviewField, current: &Value) -> VitaeResult<()> {
        self.output
            .emit(&format!("\n=== {} ===", field.key().to_uppercase()))
            .map_err(input_failed)?;
        self.output.json(current).map_err(input_failed)
    }

    fn choose(&mut self, _field: ReviewField) -> VitaeResult<ReviewChoice> {
        if self.interactive {
            return self.select();
        }
        self.output.emit(ReviewChoice::MENU).map_err(input_failed)?;
        Ok(match self.read_line()? {
            Some(line) => ReviewChoice::parse(&line),
            None => ReviewChoice::Skip,
        })
    }

    fn instruction(&mut self, _field: ReviewField) -> VitaeResult<String> {
        let prompt = "What should change?";
        if self.interactive {
            return self.ask_text(prompt);
        }
        self.output.emit(prompt).map_err(input_failed)?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn report(&mut self, field: ReviewField, outcome: &FieldOutcome) -> VitaeResult<()> {
        let line = format!("{field}: {outcome}");
        let written = match outcome {
            FieldOutcome::Rewritten(_) | FieldOutcome::Regenerated(_) => {
                self.output.success(&line)
            }
            FieldOutcome::InvalidChoice(_) | FieldOutcome::AiFailed(_) => {
                self.output.warning(&line)
            }
            FieldOutcome::Accepted | FieldOutcome::Skipped => self.output.info(&line),
        };
        written.map_err(input_failed)
    }
}

fn input_failed(e: impl std::fmt::Display) -> VitaeError {
    ApplicationError::InputFailed {
        reason: e.to_string(),
    }
    .into()
}
