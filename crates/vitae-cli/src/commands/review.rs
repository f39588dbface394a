//! `vitae review`: walk the reviewable fields with the wizard, then save.

use tracing::{info, instrument};

use vitae_adapters::JsonFileStore;
use vitae_core::application::{ResumeStore, ReviewWizard};

use crate::{
    cli::ReviewArgs, config::AppConfig, error::CliResult, output::OutputManager,
    prompt::TerminalPrompter,
};

#[instrument(skip_all, fields(resume = %args.resume.display()))]
pub fn execute(args: ReviewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let store = JsonFileStore::new();
    let mut resume = store.load(&args.resume)?;
    let assistant = super::assistant(&config, args.model.model.as_deref());

    let report = ReviewWizard::new(&assistant, TerminalPrompter::new(&output)).run(&mut resume)?;

    store.save(&resume, &args.resume)?;

    let changed = report.changed_fields();
    info!(changed = changed.len(), "Review finished");
    if changed.is_empty() {
        output.success(&format!("Review saved, no changes -> {}", args.resume.display()))?;
    } else {
        let names: Vec<&str> = changed.iter().map(|f| f.key()).collect();
        output.success(&format!(
            "Review saved ({} updated) -> {}",
            names.join(", "),
            args.resume.display()
        ))?;
    }
    Ok(())
}
