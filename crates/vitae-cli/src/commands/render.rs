//! `vitae render`: resume JSON to a themed HTML page.

use tracing::instrument;

use vitae_core::application::ThemeOverride;

use crate::{cli::RenderArgs, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(input = %args.input.display()))]
pub fn execute(args: RenderArgs, output: OutputManager) -> CliResult<()> {
    let overrides = ThemeOverride {
        theme: args.theme,
        sidebar_color: args.sidebar_color,
    };

    super::resume_service().render(&args.input, &args.output, &overrides)?;

    output.success(&format!("Rendered HTML -> {}", args.output.display()))?;
    Ok(())
}
