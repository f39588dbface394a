//! `vitae extract`: plain resume text to resume JSON.
//!
//! A reply that is not a JSON object is shown to the user together with the
//! raw model output and nothing is written. The command still succeeds, the
//! same way every other AI failure is reported in-band.

use tracing::{info, instrument, warn};

use vitae_adapters::JsonFileStore;
use vitae_core::application::{Extraction, ResumeStore};

use crate::{cli::ExtractArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(input = %args.input.display()))]
pub fn execute(args: ExtractArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let store = JsonFileStore::new();
    let text = store.read_text(&args.input)?;
    let assistant = super::assistant(&config, args.model.model.as_deref());

    let spinner = output.spinner("Extracting resume...");
    let extraction = assistant.extract_resume(&text);
    spinner.finish_and_clear();

    match extraction {
        Extraction::Parsed(map) => {
            let path = args.output.unwrap_or(config.extract.output);
            store.save_map(&map, &path)?;
            info!(keys = map.len(), path = %path.display(), "Extraction saved");
            output.success(&format!("Extracted JSON -> {}", path.display()))?;
        }
        Extraction::Failed { error, raw } => {
            warn!("Extraction reply was not a JSON object");
            output.error(&error)?;
            output.emit(&raw)?;
        }
    }

    Ok(())
}
