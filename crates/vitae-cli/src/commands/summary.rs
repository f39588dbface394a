//! `vitae summary`: generate a professional summary.

use tracing::instrument;

use vitae_adapters::JsonFileStore;
use vitae_core::application::{ResumeStore, is_ai_error};

use crate::{cli::SummaryArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(resume = %args.resume.display(), save = args.save))]
pub fn execute(args: SummaryArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let store = JsonFileStore::new();
    let mut resume = store.load(&args.resume)?;
    let assistant = super::assistant(&config, args.model.model.as_deref());

    let spinner = output.spinner("Writing summary...");
    let summary = assistant.generate_summary(&resume);
    spinner.finish_and_clear();

    output.emit(&summary)?;

    if !args.save {
        return Ok(());
    }
    if is_ai_error(&summary) {
        output.warning("Summary not saved: the AI call failed")?;
        return Ok(());
    }

    resume.summary = summary;
    store.save(&resume, &args.resume)?;
    output.success(&format!("Summary saved -> {}", args.resume.display()))?;
    Ok(())
}
